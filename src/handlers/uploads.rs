// src/handlers/uploads.rs

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{common::error::AppError, config::AppState};

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    /// Served path of the stored file, e.g. `/uploads/products/...-photo.png`.
    pub url: String,
}

// POST /api/admin/uploads
//
// Generic admin image upload for product and slide imagery. The file goes
// under `uploads/products/`; the returned URL is what gets stored on the
// product or slide record.
#[utoipa::path(
    post,
    path = "/api/admin/uploads",
    tag = "Uploads",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File stored", body = UploadResponse),
        (status = 400, description = "Missing file, unsupported format or over the size limit")
    ),
    security(("bearer_auth" = []))
)]
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidUpload(e.to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }
        let filename = field.file_name().unwrap_or("image").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidUpload(e.to_string()))?;
        let url = state.storage.save("products", &filename, &data).await?;
        return Ok((StatusCode::CREATED, Json(UploadResponse { url })));
    }

    Err(AppError::InvalidUpload("An image file is required.".into()))
}
