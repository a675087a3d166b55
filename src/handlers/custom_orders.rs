// src/handlers/custom_orders.rs

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::custom_order::{CustomOrder, UpdateCustomOrderPayload},
    services::custom_order_service::CustomOrderIntake,
};

/// Collects the multipart form into an intake struct. Unknown fields are
/// ignored so the frontend can evolve without breaking submissions.
async fn read_intake(mut multipart: Multipart) -> Result<CustomOrderIntake, AppError> {
    let mut intake = CustomOrderIntake::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidUpload(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let filename = field.file_name().unwrap_or("design").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::InvalidUpload(e.to_string()))?;
                intake.image = Some((filename, data.to_vec()));
            }
            other => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::InvalidUpload(e.to_string()))?;
                match other {
                    "customerName" => intake.customer_name = Some(value),
                    "email" => intake.email = Some(value),
                    "phone" => intake.phone = Some(value),
                    "width" => intake.width = Some(value),
                    "height" => intake.height = Some(value),
                    "quantity" => intake.quantity = Some(value),
                    "additionalDetails" => intake.additional_details = Some(value),
                    _ => {}
                }
            }
        }
    }

    Ok(intake)
}

// POST /api/custom-orders
#[utoipa::path(
    post,
    path = "/api/custom-orders",
    tag = "Custom Orders",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Custom order submitted", body = CustomOrder),
        (status = 400, description = "Missing field or invalid design image")
    )
)]
pub async fn create_custom_order(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<CustomOrder>), AppError> {
    let intake = read_intake(multipart).await?;
    let order = state.custom_order_service.create(intake).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

// GET /api/admin/custom-orders
#[utoipa::path(
    get,
    path = "/api/admin/custom-orders",
    tag = "Custom Orders",
    responses((status = 200, description = "All custom orders, newest first", body = [CustomOrder])),
    security(("bearer_auth" = []))
)]
pub async fn list_custom_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomOrder>>, AppError> {
    let orders = state.custom_order_service.list().await?;
    Ok(Json(orders))
}

// GET /api/admin/custom-orders/{id}
#[utoipa::path(
    get,
    path = "/api/admin/custom-orders/{id}",
    tag = "Custom Orders",
    params(("id" = i64, Path)),
    responses(
        (status = 200, description = "Custom order detail", body = CustomOrder),
        (status = 404, description = "Custom order not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_custom_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CustomOrder>, AppError> {
    let order = state.custom_order_service.get(id).await?;
    Ok(Json(order))
}

// PUT /api/admin/custom-orders/{id}
#[utoipa::path(
    put,
    path = "/api/admin/custom-orders/{id}",
    tag = "Custom Orders",
    params(("id" = i64, Path)),
    request_body = UpdateCustomOrderPayload,
    responses(
        (status = 200, description = "Custom order updated", body = CustomOrder),
        (status = 404, description = "Custom order not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_custom_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCustomOrderPayload>,
) -> Result<Json<CustomOrder>, AppError> {
    let order = state.custom_order_service.update(id, payload).await?;
    Ok(Json(order))
}

// DELETE /api/admin/custom-orders/{id}
#[utoipa::path(
    delete,
    path = "/api/admin/custom-orders/{id}",
    tag = "Custom Orders",
    params(("id" = i64, Path)),
    responses(
        (status = 204, description = "Custom order deleted"),
        (status = 404, description = "Custom order not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_custom_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.custom_order_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
