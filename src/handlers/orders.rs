// src/handlers/orders.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::MaybeUser,
    models::order::{
        CheckoutPayload, CheckoutResponse, Order, OrderStats, UpdateOrderStatusPayload,
    },
};

// POST /api/orders
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Orders",
    request_body = CheckoutPayload,
    responses(
        (status = 201, description = "Order placed", body = CheckoutResponse),
        (status = 400, description = "Missing field, empty order or invalid quantity"),
        (status = 404, description = "Product or variation not found")
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Json(payload): Json<CheckoutPayload>,
) -> Result<(StatusCode, Json<CheckoutResponse>), AppError> {
    let user_id = user.map(|u| u.id);
    let response = state.order_service.create_order(user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

// GET /api/admin/orders
#[utoipa::path(
    get,
    path = "/api/admin/orders",
    tag = "Orders",
    responses((status = 200, description = "All orders, newest first", body = [Order])),
    security(("bearer_auth" = []))
)]
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, AppError> {
    let orders = state.order_service.list().await?;
    Ok(Json(orders))
}

// GET /api/admin/orders/stats
#[utoipa::path(
    get,
    path = "/api/admin/orders/stats",
    tag = "Orders",
    responses((status = 200, description = "Order counts by status and completed revenue", body = OrderStats)),
    security(("bearer_auth" = []))
)]
pub async fn order_stats(State(state): State<AppState>) -> Result<Json<OrderStats>, AppError> {
    let stats = state.order_service.stats().await?;
    Ok(Json(stats))
}

// GET /api/admin/orders/{id}
#[utoipa::path(
    get,
    path = "/api/admin/orders/{id}",
    tag = "Orders",
    params(("id" = i64, Path)),
    responses(
        (status = 200, description = "Order detail", body = Order),
        (status = 404, description = "Order not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Order>, AppError> {
    let order = state.order_service.get(id).await?;
    Ok(Json(order))
}

// PUT /api/admin/orders/{id}/status
#[utoipa::path(
    put,
    path = "/api/admin/orders/{id}/status",
    tag = "Orders",
    params(("id" = i64, Path)),
    request_body = UpdateOrderStatusPayload,
    responses(
        (status = 200, description = "Status updated", body = Order),
        (status = 404, description = "Order not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateOrderStatusPayload>,
) -> Result<Json<Order>, AppError> {
    let order = state
        .order_service
        .update_status(id, payload.status, payload.payment_status)
        .await?;
    Ok(Json(order))
}

// DELETE /api/admin/orders/{id}
#[utoipa::path(
    delete,
    path = "/api/admin/orders/{id}",
    tag = "Orders",
    params(("id" = i64, Path)),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Order not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.order_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
