// src/db/order_repo.rs

use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::order::{CustomerInfo, Order, OrderItem, OrderStats, OrderStatus, PaymentMethod, PaymentStatus},
};

#[derive(Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Single atomic insert of the full snapshot.
    pub async fn insert(
        &self,
        user_id: Option<Uuid>,
        customer_info: &CustomerInfo,
        items: &[OrderItem],
        total_amount: Decimal,
        payment_method: PaymentMethod,
        payment_status: PaymentStatus,
    ) -> Result<Order, AppError> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders
                (user_id, customer_info, items, total_amount, payment_method, payment_status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(Json(customer_info))
        .bind(Json(items))
        .bind(total_amount)
        .bind(payment_method)
        .bind(payment_status)
        .fetch_one(&self.pool)
        .await?;
        Ok(order)
    }

    pub async fn list(&self) -> Result<Vec<Order>, AppError> {
        let orders = sqlx::query_as::<_, Order>("SELECT * FROM orders ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(orders)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError> {
        let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(order)
    }

    pub async fn update_status(
        &self,
        id: i64,
        status: OrderStatus,
        payment_status: Option<PaymentStatus>,
    ) -> Result<Option<Order>, AppError> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders SET
                status = $2,
                payment_status = COALESCE($3, payment_status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(payment_status)
        .fetch_optional(&self.pool)
        .await?;
        Ok(order)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Counts per status plus revenue summed over completed payments.
    pub async fn stats(&self) -> Result<OrderStats, AppError> {
        let stats = sqlx::query_as::<_, OrderStats>(
            r#"
            SELECT
                COUNT(*)                                              AS total_orders,
                COUNT(*) FILTER (WHERE status = 'pending')            AS pending,
                COUNT(*) FILTER (WHERE status = 'processing')         AS processing,
                COUNT(*) FILTER (WHERE status = 'shipped')            AS shipped,
                COUNT(*) FILTER (WHERE status = 'delivered')          AS delivered,
                COUNT(*) FILTER (WHERE status = 'cancelled')          AS cancelled,
                COALESCE(SUM(total_amount) FILTER (WHERE payment_status = 'completed'), 0)
                                                                      AS total_revenue
            FROM orders
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(stats)
    }
}
