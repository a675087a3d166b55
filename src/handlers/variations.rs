// src/handlers/variations.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    common::error::AppError,
    config::AppState,
    models::catalog::{
        BulkVariationEntry, CreateVariationPayload, ProductVariation, UpdateVariationPayload,
    },
};

// GET /api/products/{id}/variations
#[utoipa::path(
    get,
    path = "/api/products/{id}/variations",
    tag = "Variations",
    params(("id" = i64, Path)),
    responses(
        (status = 200, description = "Active variations, empty for single-SKU products", body = [ProductVariation]),
        (status = 404, description = "Product not found")
    )
)]
pub async fn list_variations(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<Vec<ProductVariation>>, AppError> {
    let variations = state.catalog_service.variations_for(product_id).await?;
    Ok(Json(variations))
}

// GET /api/admin/products/{id}/variations
#[utoipa::path(
    get,
    path = "/api/admin/products/{id}/variations",
    tag = "Variations",
    params(("id" = i64, Path)),
    responses(
        (status = 200, description = "All variations, inactive included", body = [ProductVariation]),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn admin_list_variations(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<Vec<ProductVariation>>, AppError> {
    let variations = state.variation_service.list_all_by_product(product_id).await?;
    Ok(Json(variations))
}

// POST /api/admin/variations
#[utoipa::path(
    post,
    path = "/api/admin/variations",
    tag = "Variations",
    request_body = CreateVariationPayload,
    responses(
        (status = 201, description = "Variation created", body = ProductVariation),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Color and size combination already exists")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_variation(
    State(state): State<AppState>,
    Json(payload): Json<CreateVariationPayload>,
) -> Result<(StatusCode, Json<ProductVariation>), AppError> {
    let variation = state.variation_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(variation)))
}

// PUT /api/admin/variations/{id}
#[utoipa::path(
    put,
    path = "/api/admin/variations/{id}",
    tag = "Variations",
    params(("id" = i64, Path)),
    request_body = UpdateVariationPayload,
    responses(
        (status = 200, description = "Variation updated", body = ProductVariation),
        (status = 404, description = "Variation not found"),
        (status = 409, description = "Color and size combination already exists")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_variation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateVariationPayload>,
) -> Result<Json<ProductVariation>, AppError> {
    let variation = state.variation_service.update(id, payload).await?;
    Ok(Json(variation))
}

// DELETE /api/admin/variations/{id}
#[utoipa::path(
    delete,
    path = "/api/admin/variations/{id}",
    tag = "Variations",
    params(("id" = i64, Path)),
    responses(
        (status = 204, description = "Variation deleted"),
        (status = 404, description = "Variation not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_variation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.variation_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkVariationsPayload {
    pub variations: Vec<BulkVariationEntry>,
}

// POST /api/admin/products/{id}/variations/bulk
#[utoipa::path(
    post,
    path = "/api/admin/products/{id}/variations/bulk",
    tag = "Variations",
    params(("id" = i64, Path)),
    request_body = BulkVariationsPayload,
    responses(
        (status = 200, description = "Saved variations, in input order", body = [ProductVariation]),
        (status = 400, description = "Sale price not below the base price"),
        (status = 404, description = "Product or referenced variation not found"),
        (status = 409, description = "Duplicate color and size combination")
    ),
    security(("bearer_auth" = []))
)]
pub async fn bulk_upsert_variations(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    Json(payload): Json<BulkVariationsPayload>,
) -> Result<Json<Vec<ProductVariation>>, AppError> {
    let saved = state
        .variation_service
        .bulk_upsert(product_id, payload.variations)
        .await?;
    Ok(Json(saved))
}
