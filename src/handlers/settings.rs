// src/handlers/settings.rs

use axum::{extract::State, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    models::content::{StoreSettings, UpdateStoreSettingsPayload},
};

// GET /api/settings
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "Settings",
    responses((status = 200, description = "Store settings singleton", body = StoreSettings))
)]
pub async fn get_settings(State(state): State<AppState>) -> Result<Json<StoreSettings>, AppError> {
    let settings = state.settings_service.get().await?;
    Ok(Json(settings))
}

// PUT /api/admin/settings
#[utoipa::path(
    put,
    path = "/api/admin/settings",
    tag = "Settings",
    request_body = UpdateStoreSettingsPayload,
    responses((status = 200, description = "Settings updated", body = StoreSettings)),
    security(("bearer_auth" = []))
)]
pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<UpdateStoreSettingsPayload>,
) -> Result<Json<StoreSettings>, AppError> {
    let settings = state.settings_service.update(payload).await?;
    Ok(Json(settings))
}
