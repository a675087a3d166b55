// src/services/catalog_service.rs

use rust_decimal::Decimal;
use validator::Validate;

use crate::{
    common::{error::AppError, pricing},
    db::{ProductRepository, VariationRepository, product_repo::ProductFilter},
    models::catalog::{
        CreateProductPayload, Product, ProductPage, ProductVariation, ProductWithVariations,
        UpdateProductPayload,
    },
};

const DEFAULT_PAGE_SIZE: u32 = 12;
const MAX_PAGE_SIZE: u32 = 100;

/// Offset pagination. Page numbers are 1-based; out-of-range values clamp
/// instead of erroring.
pub fn page_params(page: Option<u32>, limit: Option<u32>) -> (u32, u32, i64) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let offset = i64::from(page - 1) * i64::from(limit);
    (page, limit, offset)
}

pub fn total_pages(total: i64, limit: u32) -> u32 {
    if total <= 0 {
        return 0;
    }
    let limit = i64::from(limit);
    ((total + limit - 1) / limit) as u32
}

/// Write-time invariant: a present sale price must undercut the regular
/// price, whether or not the sale flag is currently set.
fn enforce_sale_price(price: Decimal, sale_price: Option<Decimal>) -> Result<(), AppError> {
    if pricing::sale_price_is_valid(price, sale_price) {
        Ok(())
    } else {
        Err(AppError::SalePriceNotBelowPrice)
    }
}

/// Lowercase ASCII slug from a product name; non-alphanumerics collapse to
/// single dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[derive(Clone)]
pub struct CatalogService {
    product_repo: ProductRepository,
    variation_repo: VariationRepository,
}

impl CatalogService {
    pub fn new(product_repo: ProductRepository, variation_repo: VariationRepository) -> Self {
        Self { product_repo, variation_repo }
    }

    pub async fn list(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
        filter: ProductFilter,
    ) -> Result<ProductPage, AppError> {
        let (page, limit, offset) = page_params(page, limit);

        let total = self.product_repo.count(&filter).await?;
        let products = self.product_repo.list_page(&filter, i64::from(limit), offset).await?;

        let mut with_variations = Vec::with_capacity(products.len());
        for product in products {
            let variations = self.variation_repo.list_active_by_product(product.id).await?;
            with_variations.push(ProductWithVariations { product, variations });
        }

        Ok(ProductPage {
            products: with_variations,
            current_page: page,
            total_pages: total_pages(total, limit),
            total_products: total,
        })
    }

    /// Detail lookup: a numeric path segment is an id, anything else a slug.
    pub async fn detail(&self, id_or_slug: &str) -> Result<ProductWithVariations, AppError> {
        let product = match id_or_slug.parse::<i64>() {
            Ok(id) => self.product_repo.find_by_id(id).await?,
            Err(_) => self.product_repo.find_by_slug(id_or_slug).await?,
        }
        .ok_or(AppError::ProductNotFound)?;

        let variations = self.variation_repo.list_active_by_product(product.id).await?;
        Ok(ProductWithVariations { product, variations })
    }

    /// Active variations for a product. An empty list means a single-SKU
    /// product, not a failure.
    pub async fn variations_for(&self, product_id: i64) -> Result<Vec<ProductVariation>, AppError> {
        self.product_repo
            .find_by_id(product_id)
            .await?
            .ok_or(AppError::ProductNotFound)?;
        self.variation_repo.list_active_by_product(product_id).await
    }

    pub async fn create_product(&self, payload: CreateProductPayload) -> Result<Product, AppError> {
        payload.validate()?;
        enforce_sale_price(payload.price, payload.sale_price)?;
        let slug = match &payload.slug {
            Some(slug) if !slug.is_empty() => slug.clone(),
            _ => slugify(&payload.name),
        };
        self.product_repo
            .create(
                &payload.name,
                &slug,
                &payload.description,
                &payload.detailed_description,
                payload.price,
                &payload.images,
                &payload.features,
                &payload.specifications,
                payload.category,
                payload.stock,
                payload.is_on_sale,
                payload.sale_price,
            )
            .await
    }

    pub async fn update_product(
        &self,
        id: i64,
        payload: UpdateProductPayload,
    ) -> Result<Product, AppError> {
        let mut product = self
            .product_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ProductNotFound)?;

        if let Some(name) = payload.name {
            product.name = name;
        }
        if let Some(slug) = payload.slug {
            product.slug = slug;
        }
        if let Some(description) = payload.description {
            product.description = description;
        }
        if let Some(detailed) = payload.detailed_description {
            product.detailed_description = detailed;
        }
        if let Some(price) = payload.price {
            product.price = price;
        }
        if let Some(images) = payload.images {
            product.images = images;
        }
        if let Some(features) = payload.features {
            product.features = features;
        }
        if let Some(specifications) = payload.specifications {
            product.specifications = sqlx::types::Json(specifications);
        }
        if let Some(category) = payload.category {
            product.category = category;
        }
        if let Some(stock) = payload.stock {
            product.stock = stock;
        }
        if let Some(is_active) = payload.is_active {
            product.is_active = is_active;
        }
        if let Some(is_on_sale) = payload.is_on_sale {
            product.is_on_sale = is_on_sale;
        }
        if let Some(sale_price) = payload.sale_price {
            product.sale_price = Some(sale_price);
        }

        enforce_sale_price(product.price, product.sale_price)?;

        self.product_repo.update(&product).await
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), AppError> {
        if !self.product_repo.delete(id).await? {
            return Err(AppError::ProductNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_params_defaults_and_clamps() {
        assert_eq!(page_params(None, None), (1, 12, 0));
        assert_eq!(page_params(Some(3), Some(20)), (3, 20, 40));
        assert_eq!(page_params(Some(0), Some(0)), (1, 1, 0));
        assert_eq!(page_params(Some(2), Some(500)), (2, 100, 100));
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(1, 12), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(25, 12), 3);
        assert_eq!(total_pages(7, 1), 7);
    }

    #[test]
    fn sale_price_rejected_even_when_sale_flag_is_off() {
        use rust_decimal_macros::dec;
        // The stored value must be sound before the flag ever flips on.
        assert!(enforce_sale_price(dec!(100.00), None).is_ok());
        assert!(enforce_sale_price(dec!(100.00), Some(dec!(80.00))).is_ok());
        assert!(matches!(
            enforce_sale_price(dec!(100.00), Some(dec!(100.00))),
            Err(AppError::SalePriceNotBelowPrice)
        ));
        assert!(matches!(
            enforce_sale_price(dec!(100.00), Some(dec!(120.00))),
            Err(AppError::SalePriceNotBelowPrice)
        ));
    }

    #[test]
    fn slugify_collapses_and_trims() {
        assert_eq!(slugify("Wolf Panel"), "wolf-panel");
        assert_eq!(slugify("  Metal -- Art!  "), "metal-art");
        assert_eq!(slugify("Size 60x80"), "size-60x80");
    }
}
