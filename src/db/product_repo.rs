// src/db/product_repo.rs

use sqlx::types::Json;
use sqlx::{PgPool, QueryBuilder};

use crate::{
    common::error::AppError,
    models::catalog::{Product, ProductCategory, Specifications},
};

/// Filters for the paginated listing. `include_inactive` is only ever set by
/// the admin surface.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<ProductCategory>,
    pub search: Option<String>,
    pub include_inactive: bool,
}

#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn push_filter(builder: &mut QueryBuilder<'_, sqlx::Postgres>, filter: &ProductFilter) {
        if !filter.include_inactive {
            builder.push(" AND is_active = TRUE");
        }
        if let Some(category) = filter.category {
            builder.push(" AND category = ").push_bind(category);
        }
        if let Some(search) = &filter.search {
            // Plain substring match on name/description.
            let pattern = format!("%{}%", search);
            builder
                .push(" AND (name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR description ILIKE ")
                .push_bind(pattern)
                .push(")");
        }
    }

    pub async fn count(&self, filter: &ProductFilter) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM products WHERE 1=1");
        Self::push_filter(&mut builder, filter);
        let total: i64 = builder.build_query_scalar().fetch_one(&self.pool).await?;
        Ok(total)
    }

    pub async fn list_page(
        &self,
        filter: &ProductFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Product>, AppError> {
        let mut builder = QueryBuilder::new("SELECT * FROM products WHERE 1=1");
        Self::push_filter(&mut builder, filter);
        builder
            .push(" ORDER BY created_at DESC, id DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);
        let products = builder.build_query_as::<Product>().fetch_all(&self.pool).await?;
        Ok(products)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(product)
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        Ok(product)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        name: &str,
        slug: &str,
        description: &str,
        detailed_description: &[String],
        price: rust_decimal::Decimal,
        images: &[String],
        features: &[String],
        specifications: &Specifications,
        category: ProductCategory,
        stock: i32,
        is_on_sale: bool,
        sale_price: Option<rust_decimal::Decimal>,
    ) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products
                (name, slug, description, detailed_description, price, images,
                 features, specifications, category, stock, is_on_sale, sale_price)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(slug)
        .bind(description)
        .bind(detailed_description)
        .bind(price)
        .bind(images)
        .bind(features)
        .bind(Json(specifications))
        .bind(category)
        .bind(stock)
        .bind(is_on_sale)
        .bind(sale_price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::SlugAlreadyExists;
                }
            }
            e.into()
        })?;
        Ok(product)
    }

    /// Full overwrite of the mutable columns. The service merges partial
    /// payloads into the loaded row before calling this.
    pub async fn update(&self, product: &Product) -> Result<Product, AppError> {
        let updated = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products SET
                name = $2, slug = $3, description = $4, detailed_description = $5,
                price = $6, images = $7, features = $8, specifications = $9,
                category = $10, stock = $11, is_active = $12, is_on_sale = $13,
                sale_price = $14, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.slug)
        .bind(&product.description)
        .bind(&product.detailed_description)
        .bind(product.price)
        .bind(&product.images)
        .bind(&product.features)
        .bind(&product.specifications)
        .bind(product.category)
        .bind(product.stock)
        .bind(product.is_active)
        .bind(product.is_on_sale)
        .bind(product.sale_price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::SlugAlreadyExists;
                }
            }
            e.into()
        })?;
        Ok(updated)
    }

    /// Hard delete; the FK cascade removes the product's variations.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
