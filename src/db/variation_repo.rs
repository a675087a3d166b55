// src/db/variation_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};

use crate::{common::error::AppError, models::catalog::ProductVariation};

fn map_combo_conflict(e: sqlx::Error, color: &str, size: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::VariationConflict {
                color: color.to_string(),
                size: size.to_string(),
            };
        }
    }
    e.into()
}

#[derive(Clone)]
pub struct VariationRepository {
    pool: PgPool,
}

impl VariationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Storefront read: active variations only, in a stable color-then-size
    /// order. An empty result is a valid answer (single-SKU product).
    pub async fn list_active_by_product(
        &self,
        product_id: i64,
    ) -> Result<Vec<ProductVariation>, AppError> {
        let variations = sqlx::query_as::<_, ProductVariation>(
            r#"
            SELECT * FROM product_variations
            WHERE product_id = $1 AND is_active = TRUE
            ORDER BY color ASC, size ASC
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(variations)
    }

    pub async fn list_by_product(&self, product_id: i64) -> Result<Vec<ProductVariation>, AppError> {
        let variations = sqlx::query_as::<_, ProductVariation>(
            r#"
            SELECT * FROM product_variations
            WHERE product_id = $1
            ORDER BY color ASC, size ASC
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(variations)
    }

    /// Takes an executor so bulk upserts can read through their own
    /// transaction instead of the pool.
    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: i64,
    ) -> Result<Option<ProductVariation>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let variation =
            sqlx::query_as::<_, ProductVariation>("SELECT * FROM product_variations WHERE id = $1")
                .bind(id)
                .fetch_optional(executor)
                .await?;
        Ok(variation)
    }

    /// Lookup by the full combination key, used when snapshotting order lines.
    pub async fn find_by_combo(
        &self,
        product_id: i64,
        color: &str,
        size: &str,
    ) -> Result<Option<ProductVariation>, AppError> {
        let variation = sqlx::query_as::<_, ProductVariation>(
            r#"
            SELECT * FROM product_variations
            WHERE product_id = $1 AND color = $2 AND size = $3
            "#,
        )
        .bind(product_id)
        .bind(color)
        .bind(size)
        .fetch_optional(&self.pool)
        .await?;
        Ok(variation)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert<'e, E>(
        &self,
        executor: E,
        product_id: i64,
        color: &str,
        size: &str,
        price: Decimal,
        sale_price: Option<Decimal>,
        images: &[String],
        is_active: bool,
    ) -> Result<ProductVariation, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, ProductVariation>(
            r#"
            INSERT INTO product_variations
                (product_id, color, size, price, sale_price, images, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(product_id)
        .bind(color)
        .bind(size)
        .bind(price)
        .bind(sale_price)
        .bind(images)
        .bind(is_active)
        .fetch_one(executor)
        .await
        .map_err(|e| map_combo_conflict(e, color, size))
    }

    /// Full overwrite of an existing row, keyed by id. Used both by the
    /// single-variation update (after the service merges omitted fields) and
    /// by the bulk upsert's "has id" branch.
    pub async fn update<'e, E>(
        &self,
        executor: E,
        variation: &ProductVariation,
    ) -> Result<ProductVariation, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, ProductVariation>(
            r#"
            UPDATE product_variations SET
                color = $2, size = $3, price = $4, sale_price = $5,
                images = $6, is_active = $7, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(variation.id)
        .bind(&variation.color)
        .bind(&variation.size)
        .bind(variation.price)
        .bind(variation.sale_price)
        .bind(&variation.images)
        .bind(variation.is_active)
        .fetch_one(executor)
        .await
        .map_err(|e| map_combo_conflict(e, &variation.color, &variation.size))
    }

    /// Hard delete, no side effects beyond the row.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM product_variations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
