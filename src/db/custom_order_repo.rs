// src/db/custom_order_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, models::custom_order::CustomOrder};

#[derive(Clone)]
pub struct CustomOrderRepository {
    pool: PgPool,
}

impl CustomOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        &self,
        customer_name: &str,
        email: &str,
        phone: &str,
        image_url: &str,
        width: &str,
        height: &str,
        quantity: i32,
        additional_details: Option<&str>,
    ) -> Result<CustomOrder, AppError> {
        let order = sqlx::query_as::<_, CustomOrder>(
            r#"
            INSERT INTO custom_orders
                (customer_name, email, phone, image_url, width, height, quantity, additional_details)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(customer_name)
        .bind(email)
        .bind(phone)
        .bind(image_url)
        .bind(width)
        .bind(height)
        .bind(quantity)
        .bind(additional_details)
        .fetch_one(&self.pool)
        .await?;
        Ok(order)
    }

    pub async fn list(&self) -> Result<Vec<CustomOrder>, AppError> {
        let orders =
            sqlx::query_as::<_, CustomOrder>("SELECT * FROM custom_orders ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(orders)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<CustomOrder>, AppError> {
        let order = sqlx::query_as::<_, CustomOrder>("SELECT * FROM custom_orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(order)
    }

    /// Full overwrite of the admin-editable columns; the service merges
    /// omitted payload fields into the loaded row first.
    pub async fn update(&self, order: &CustomOrder) -> Result<CustomOrder, AppError> {
        let updated = sqlx::query_as::<_, CustomOrder>(
            r#"
            UPDATE custom_orders SET
                status = $2, estimated_price = $3, admin_notes = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(order.id)
        .bind(order.status)
        .bind(order.estimated_price)
        .bind(order.admin_notes.as_deref())
        .fetch_one(&self.pool)
        .await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM custom_orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
