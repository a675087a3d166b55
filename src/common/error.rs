// src/common/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed")]
    ValidationError(#[from] validator::ValidationErrors),

    // Checkout reports the first absent required field by name.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("sale price must be lower than the regular price")]
    SalePriceNotBelowPrice,

    #[error("empty order")]
    EmptyOrder,

    #[error("quantity must be at least 1")]
    InvalidQuantity,

    #[error("e-mail already registered")]
    EmailAlreadyExists,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid token")]
    InvalidToken,

    #[error("admin privileges required")]
    AdminOnly,

    #[error("user not found")]
    UserNotFound,

    #[error("product not found")]
    ProductNotFound,

    #[error("variation not found")]
    VariationNotFound,

    #[error("variation {color}/{size} already exists for this product")]
    VariationConflict { color: String, size: String },

    #[error("slug already in use")]
    SlugAlreadyExists,

    #[error("order not found")]
    OrderNotFound,

    #[error("custom order not found")]
    CustomOrderNotFound,

    #[error("not found")]
    NotFound,

    // Upload problems: missing file field, bad format, oversize, broken image.
    #[error("invalid upload: {0}")]
    InvalidUpload(String),

    #[error("database error")]
    DatabaseError(#[from] sqlx::Error),

    #[error("internal server error")]
    InternalServerError(#[from] anyhow::Error),

    #[error("bcrypt error: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "One or more fields are invalid.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::MissingField(field) => {
                let body = Json(json!({
                    "error": format!("The field '{field}' is required."),
                    "field": field,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::VariationConflict { ref color, ref size } => {
                let body = Json(json!({
                    "error": format!(
                        "A variation with color '{color}' and size '{size}' already exists for this product."
                    ),
                }));
                return (StatusCode::CONFLICT, body).into_response();
            }
            AppError::InvalidUpload(ref msg) => {
                let body = Json(json!({ "error": msg }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::SalePriceNotBelowPrice => (
                StatusCode::BAD_REQUEST,
                "The sale price must be lower than the regular price.",
            ),
            AppError::EmptyOrder => (StatusCode::BAD_REQUEST, "The order has no items."),
            AppError::InvalidQuantity => {
                (StatusCode::BAD_REQUEST, "Item quantity must be at least 1.")
            }
            AppError::EmailAlreadyExists => (StatusCode::CONFLICT, "This e-mail is already in use."),
            AppError::SlugAlreadyExists => {
                (StatusCode::CONFLICT, "A product with this slug already exists.")
            }
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid e-mail or password."),
            AppError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, "Missing or invalid authentication token.")
            }
            AppError::AdminOnly => (StatusCode::FORBIDDEN, "Admin privileges required."),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "User not found."),
            AppError::ProductNotFound => (StatusCode::NOT_FOUND, "Product not found."),
            AppError::VariationNotFound => (StatusCode::NOT_FOUND, "Variation not found."),
            AppError::OrderNotFound => (StatusCode::NOT_FOUND, "Order not found."),
            AppError::CustomOrderNotFound => (StatusCode::NOT_FOUND, "Custom order not found."),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found."),

            // Everything else surfaces as a 500 with a generic body; the
            // detailed message goes to the log only.
            ref e => {
                tracing::error!("internal server error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "An unexpected error occurred.")
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
