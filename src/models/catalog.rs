// src/models/catalog.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "product_category", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Nature,
    Animals,
    Abstract,
    Religious,
    Maps,
    Other,
}

/// Typed specification keys per the wall-art catalog. Unknown legacy keys from
/// older imports are dropped on write instead of merged into an open blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Specifications {
    pub material: Option<String>,
    pub mounting: Option<String>,
    pub weight: Option<String>,
    pub dimensions: Option<String>,
    pub compatibility: Vec<String>,
    pub finishes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub detailed_description: Vec<String>,
    pub price: Decimal,
    pub images: Vec<String>,
    pub features: Vec<String>,
    #[schema(value_type = Specifications)]
    pub specifications: Json<Specifications>,
    pub category: ProductCategory,
    /// Advisory only; never decremented server-side.
    pub stock: i32,
    pub is_active: bool,
    pub is_on_sale: bool,
    // Absent from the payload when null; clients treat absence as "not on sale".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariation {
    pub id: i64,
    pub product_id: i64,
    pub color: String,
    pub size: String,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Decimal>,
    /// May be empty; display then falls back to the product images.
    pub images: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing/detail shape: a product with its active variations embedded.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductWithVariations {
    #[serde(flatten)]
    pub product: Product,
    pub variations: Vec<ProductVariation>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub products: Vec<ProductWithVariations>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_products: i64,
}

// ---
// Admin payloads
// ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    #[validate(length(min = 1, message = "The name is required."))]
    pub name: String,
    /// Derived from the name when omitted.
    pub slug: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub detailed_description: Vec<String>,
    pub price: Decimal,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub specifications: Specifications,
    pub category: ProductCategory,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub is_on_sale: bool,
    pub sale_price: Option<Decimal>,
}

/// Partial update: omitted fields keep their stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductPayload {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub detailed_description: Option<Vec<String>>,
    pub price: Option<Decimal>,
    pub images: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub specifications: Option<Specifications>,
    pub category: Option<ProductCategory>,
    pub stock: Option<i32>,
    pub is_active: Option<bool>,
    pub is_on_sale: Option<bool>,
    pub sale_price: Option<Decimal>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVariationPayload {
    pub product_id: i64,
    #[validate(length(min = 1, message = "The color is required."))]
    pub color: String,
    #[validate(length(min = 1, message = "The size is required."))]
    pub size: String,
    pub price: Decimal,
    pub sale_price: Option<Decimal>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Partial update: omitted fields keep their stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVariationPayload {
    pub color: Option<String>,
    pub size: Option<String>,
    pub price: Option<Decimal>,
    pub sale_price: Option<Decimal>,
    pub images: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

/// One entry of the bulk upsert: an `id` means "overwrite that row", no id
/// means "insert". `is_active` defaults to true when omitted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkVariationEntry {
    pub id: Option<i64>,
    pub color: String,
    pub size: String,
    pub price: Decimal,
    pub sale_price: Option<Decimal>,
    #[serde(default)]
    pub images: Vec<String>,
    pub is_active: Option<bool>,
}
