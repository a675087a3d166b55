// src/handlers/content.rs
//
// Hero slides, gallery and the contact form.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::content::{
        ContactMessage, CreateContactPayload, CreateHeroSlidePayload, GalleryImage, HeroSlide,
        UpdateHeroSlidePayload,
    },
};

// --- Hero slides ---

// GET /api/hero-slides
#[utoipa::path(
    get,
    path = "/api/hero-slides",
    tag = "Content",
    responses((status = 200, description = "Active slides in display order", body = [HeroSlide]))
)]
pub async fn list_hero_slides(
    State(state): State<AppState>,
) -> Result<Json<Vec<HeroSlide>>, AppError> {
    let slides = state.content_service.active_slides().await?;
    Ok(Json(slides))
}

// GET /api/admin/hero-slides
#[utoipa::path(
    get,
    path = "/api/admin/hero-slides",
    tag = "Content",
    responses((status = 200, description = "All slides, inactive included", body = [HeroSlide])),
    security(("bearer_auth" = []))
)]
pub async fn admin_list_hero_slides(
    State(state): State<AppState>,
) -> Result<Json<Vec<HeroSlide>>, AppError> {
    let slides = state.content_service.all_slides().await?;
    Ok(Json(slides))
}

// POST /api/admin/hero-slides
#[utoipa::path(
    post,
    path = "/api/admin/hero-slides",
    tag = "Content",
    request_body = CreateHeroSlidePayload,
    responses(
        (status = 201, description = "Slide created", body = HeroSlide),
        (status = 400, description = "Invalid payload")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_hero_slide(
    State(state): State<AppState>,
    Json(payload): Json<CreateHeroSlidePayload>,
) -> Result<(StatusCode, Json<HeroSlide>), AppError> {
    let slide = state.content_service.create_slide(payload).await?;
    Ok((StatusCode::CREATED, Json(slide)))
}

// PUT /api/admin/hero-slides/{id}
#[utoipa::path(
    put,
    path = "/api/admin/hero-slides/{id}",
    tag = "Content",
    params(("id" = i64, Path)),
    request_body = UpdateHeroSlidePayload,
    responses(
        (status = 200, description = "Slide updated", body = HeroSlide),
        (status = 404, description = "Slide not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_hero_slide(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateHeroSlidePayload>,
) -> Result<Json<HeroSlide>, AppError> {
    let slide = state.content_service.update_slide(id, payload).await?;
    Ok(Json(slide))
}

// DELETE /api/admin/hero-slides/{id}
#[utoipa::path(
    delete,
    path = "/api/admin/hero-slides/{id}",
    tag = "Content",
    params(("id" = i64, Path)),
    responses(
        (status = 204, description = "Slide deleted"),
        (status = 404, description = "Slide not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_hero_slide(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.content_service.delete_slide(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Gallery ---

// GET /api/gallery
#[utoipa::path(
    get,
    path = "/api/gallery",
    tag = "Content",
    responses((status = 200, description = "Gallery images in display order", body = [GalleryImage]))
)]
pub async fn list_gallery(
    State(state): State<AppState>,
) -> Result<Json<Vec<GalleryImage>>, AppError> {
    let images = state.content_service.gallery().await?;
    Ok(Json(images))
}

// POST /api/admin/gallery
//
// Multipart form: an `image` file plus optional `title` and `sortOrder`
// text fields.
#[utoipa::path(
    post,
    path = "/api/admin/gallery",
    tag = "Content",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Image stored and recorded", body = GalleryImage),
        (status = 400, description = "Missing or invalid image file")
    ),
    security(("bearer_auth" = []))
)]
pub async fn upload_gallery_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<GalleryImage>), AppError> {
    let mut title: Option<String> = None;
    let mut sort_order: i32 = 0;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidUpload(e.to_string()))?
    {
        match field.name().unwrap_or_default() {
            "image" => {
                let filename = field.file_name().unwrap_or("gallery").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::InvalidUpload(e.to_string()))?;
                file = Some((filename, data.to_vec()));
            }
            "title" => {
                title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::InvalidUpload(e.to_string()))?,
                );
            }
            "sortOrder" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::InvalidUpload(e.to_string()))?;
                sort_order = raw
                    .trim()
                    .parse()
                    .map_err(|_| AppError::InvalidUpload("sortOrder must be a number.".into()))?;
            }
            _ => {}
        }
    }

    let (filename, data) = file
        .ok_or_else(|| AppError::InvalidUpload("An image file is required.".into()))?;
    let image = state
        .content_service
        .add_gallery_image(title, sort_order, &filename, &data)
        .await?;
    Ok((StatusCode::CREATED, Json(image)))
}

// DELETE /api/admin/gallery/{id}
#[utoipa::path(
    delete,
    path = "/api/admin/gallery/{id}",
    tag = "Content",
    params(("id" = i64, Path)),
    responses(
        (status = 204, description = "Image deleted"),
        (status = 404, description = "Image not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_gallery_image(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.content_service.delete_gallery_image(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Contact inbox ---

// POST /api/contact
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "Content",
    request_body = CreateContactPayload,
    responses(
        (status = 201, description = "Message received", body = ContactMessage),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<CreateContactPayload>,
) -> Result<(StatusCode, Json<ContactMessage>), AppError> {
    let contact = state.content_service.submit_contact(payload).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

// GET /api/admin/contacts
#[utoipa::path(
    get,
    path = "/api/admin/contacts",
    tag = "Content",
    responses((status = 200, description = "All messages, newest first", body = [ContactMessage])),
    security(("bearer_auth" = []))
)]
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactMessage>>, AppError> {
    let contacts = state.content_service.list_contacts().await?;
    Ok(Json(contacts))
}

// PUT /api/admin/contacts/{id}/read
#[utoipa::path(
    put,
    path = "/api/admin/contacts/{id}/read",
    tag = "Content",
    params(("id" = i64, Path)),
    responses(
        (status = 200, description = "Message marked read", body = ContactMessage),
        (status = 404, description = "Message not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn mark_contact_read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ContactMessage>, AppError> {
    let contact = state.content_service.mark_contact_read(id).await?;
    Ok(Json(contact))
}

// DELETE /api/admin/contacts/{id}
#[utoipa::path(
    delete,
    path = "/api/admin/contacts/{id}",
    tag = "Content",
    params(("id" = i64, Path)),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 404, description = "Message not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.content_service.delete_contact(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
