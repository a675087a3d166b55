// src/services/variation_service.rs

use sqlx::PgPool;
use validator::Validate;

use crate::{
    common::{error::AppError, pricing},
    db::{ProductRepository, VariationRepository},
    models::catalog::{
        BulkVariationEntry, CreateVariationPayload, ProductVariation, UpdateVariationPayload,
    },
};

#[derive(Clone)]
pub struct VariationService {
    pool: PgPool,
    variation_repo: VariationRepository,
    product_repo: ProductRepository,
}

impl VariationService {
    pub fn new(
        pool: PgPool,
        variation_repo: VariationRepository,
        product_repo: ProductRepository,
    ) -> Self {
        Self { pool, variation_repo, product_repo }
    }

    pub async fn create(&self, payload: CreateVariationPayload) -> Result<ProductVariation, AppError> {
        payload.validate()?;
        self.product_repo
            .find_by_id(payload.product_id)
            .await?
            .ok_or(AppError::ProductNotFound)?;

        if !pricing::sale_price_is_valid(payload.price, payload.sale_price) {
            return Err(AppError::SalePriceNotBelowPrice);
        }

        self.variation_repo
            .insert(
                &self.pool,
                payload.product_id,
                &payload.color,
                &payload.size,
                payload.price,
                payload.sale_price,
                &payload.images,
                true,
            )
            .await
    }

    /// Partial update by id; omitted fields keep their stored value.
    pub async fn update(
        &self,
        id: i64,
        payload: UpdateVariationPayload,
    ) -> Result<ProductVariation, AppError> {
        let mut variation = self
            .variation_repo
            .find_by_id(&self.pool, id)
            .await?
            .ok_or(AppError::VariationNotFound)?;

        if let Some(color) = payload.color {
            variation.color = color;
        }
        if let Some(size) = payload.size {
            variation.size = size;
        }
        if let Some(price) = payload.price {
            variation.price = price;
        }
        if let Some(sale_price) = payload.sale_price {
            variation.sale_price = Some(sale_price);
        }
        if let Some(images) = payload.images {
            variation.images = images;
        }
        if let Some(is_active) = payload.is_active {
            variation.is_active = is_active;
        }

        if !pricing::sale_price_is_valid(variation.price, variation.sale_price) {
            return Err(AppError::SalePriceNotBelowPrice);
        }

        self.variation_repo.update(&self.pool, &variation).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.variation_repo.delete(id).await? {
            return Err(AppError::VariationNotFound);
        }
        Ok(())
    }

    /// Bulk upsert: entries with an id overwrite that row, entries without
    /// are inserted; results come back in input order. The whole batch runs
    /// in one transaction, so a failure on entry k rolls back entries 1..k-1.
    pub async fn bulk_upsert(
        &self,
        product_id: i64,
        entries: Vec<BulkVariationEntry>,
    ) -> Result<Vec<ProductVariation>, AppError> {
        self.product_repo
            .find_by_id(product_id)
            .await?
            .ok_or(AppError::ProductNotFound)?;

        for entry in &entries {
            if !pricing::sale_price_is_valid(entry.price, entry.sale_price) {
                return Err(AppError::SalePriceNotBelowPrice);
            }
        }

        let mut tx = self.pool.begin().await?;
        let mut results = Vec::with_capacity(entries.len());

        for entry in entries {
            let saved = match entry.id {
                Some(id) => {
                    // Read through the transaction so the existence check and
                    // the overwrite see the same snapshot.
                    let existing = self
                        .variation_repo
                        .find_by_id(&mut *tx, id)
                        .await?
                        .filter(|v| v.product_id == product_id)
                        .ok_or(AppError::VariationNotFound)?;
                    let overwrite = ProductVariation {
                        color: entry.color,
                        size: entry.size,
                        price: entry.price,
                        sale_price: entry.sale_price,
                        images: entry.images,
                        is_active: entry.is_active.unwrap_or(true),
                        ..existing
                    };
                    self.variation_repo.update(&mut *tx, &overwrite).await?
                }
                None => {
                    self.variation_repo
                        .insert(
                            &mut *tx,
                            product_id,
                            &entry.color,
                            &entry.size,
                            entry.price,
                            entry.sale_price,
                            &entry.images,
                            entry.is_active.unwrap_or(true),
                        )
                        .await?
                }
            };
            results.push(saved);
        }

        tx.commit().await?;
        Ok(results)
    }

    pub async fn list_all_by_product(
        &self,
        product_id: i64,
    ) -> Result<Vec<ProductVariation>, AppError> {
        self.product_repo
            .find_by_id(product_id)
            .await?
            .ok_or(AppError::ProductNotFound)?;
        self.variation_repo.list_by_product(product_id).await
    }
}
