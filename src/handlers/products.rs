// src/handlers/products.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::AppError,
    config::AppState,
    db::product_repo::ProductFilter,
    models::catalog::{
        CreateProductPayload, Product, ProductCategory, ProductPage, ProductWithVariations,
        UpdateProductPayload,
    },
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsQuery {
    /// 1-based page number, defaults to 1.
    pub page: Option<u32>,
    /// Page size, defaults to 12, capped at 100.
    pub limit: Option<u32>,
    pub category: Option<ProductCategory>,
    /// Case-insensitive match against name and description.
    pub search: Option<String>,
}

impl ListProductsQuery {
    fn into_filter(self, include_inactive: bool) -> (Option<u32>, Option<u32>, ProductFilter) {
        let filter = ProductFilter {
            category: self.category,
            search: self.search.filter(|s| !s.trim().is_empty()),
            include_inactive,
        };
        (self.page, self.limit, filter)
    }
}

// GET /api/products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "Paginated active products", body = ProductPage)
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<ProductPage>, AppError> {
    let (page, limit, filter) = query.into_filter(false);
    let page = state.catalog_service.list(page, limit, filter).await?;
    Ok(Json(page))
}

// GET /api/products/{idOrSlug}
#[utoipa::path(
    get,
    path = "/api/products/{idOrSlug}",
    tag = "Products",
    params(("idOrSlug" = String, Path, description = "Numeric id or slug")),
    responses(
        (status = 200, description = "Product with active variations", body = ProductWithVariations),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id_or_slug): Path<String>,
) -> Result<Json<ProductWithVariations>, AppError> {
    let product = state.catalog_service.detail(&id_or_slug).await?;
    Ok(Json(product))
}

// GET /api/admin/products
#[utoipa::path(
    get,
    path = "/api/admin/products",
    tag = "Products",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "Paginated products, inactive included", body = ProductPage)
    ),
    security(("bearer_auth" = []))
)]
pub async fn admin_list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<ProductPage>, AppError> {
    let (page, limit, filter) = query.into_filter(true);
    let page = state.catalog_service.list(page, limit, filter).await?;
    Ok(Json(page))
}

// POST /api/admin/products
#[utoipa::path(
    post,
    path = "/api/admin/products",
    tag = "Products",
    request_body = CreateProductPayload,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "Slug already in use")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductPayload>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let product = state.catalog_service.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

// PUT /api/admin/products/{id}
#[utoipa::path(
    put,
    path = "/api/admin/products/{id}",
    tag = "Products",
    params(("id" = i64, Path)),
    request_body = UpdateProductPayload,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Slug already in use")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProductPayload>,
) -> Result<Json<Product>, AppError> {
    let product = state.catalog_service.update_product(id, payload).await?;
    Ok(Json(product))
}

// DELETE /api/admin/products/{id}
#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}",
    tag = "Products",
    params(("id" = i64, Path)),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.catalog_service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
