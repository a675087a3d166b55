// src/models/custom_order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "custom_order_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CustomOrderStatus {
    Pending,
    InReview,
    Approved,
    InProduction,
    Completed,
    Cancelled,
}

/// Bespoke-design intake record. Unrelated to catalog products and orders;
/// the shopper uploads a design image and names the dimensions themselves.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomOrder {
    pub id: i64,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub image_url: String,
    // Free-text on purpose: customers write "60sm", "1.2m" and similar.
    pub width: String,
    pub height: String,
    pub quantity: i32,
    pub additional_details: Option<String>,
    pub status: CustomOrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_price: Option<Decimal>,
    pub admin_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Admin follow-up: any of the three may arrive alone, in any order. Only
/// the status values themselves are constrained (by the enum).
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomOrderPayload {
    pub status: Option<CustomOrderStatus>,
    pub estimated_price: Option<Decimal>,
    pub admin_notes: Option<String>,
}
