// src/services/content_service.rs
//
// Hero slides, gallery images and the contact inbox.

use validator::Validate;

use crate::{
    common::error::AppError,
    db::ContentRepository,
    models::content::{
        ContactMessage, CreateContactPayload, CreateHeroSlidePayload, GalleryImage, HeroSlide,
        UpdateHeroSlidePayload,
    },
    services::storage::ImageStorage,
};

#[derive(Clone)]
pub struct ContentService {
    repo: ContentRepository,
    storage: ImageStorage,
}

impl ContentService {
    pub fn new(repo: ContentRepository, storage: ImageStorage) -> Self {
        Self { repo, storage }
    }

    // --- Hero slides ---

    pub async fn active_slides(&self) -> Result<Vec<HeroSlide>, AppError> {
        self.repo.list_active_slides().await
    }

    pub async fn all_slides(&self) -> Result<Vec<HeroSlide>, AppError> {
        self.repo.list_slides().await
    }

    pub async fn create_slide(
        &self,
        payload: CreateHeroSlidePayload,
    ) -> Result<HeroSlide, AppError> {
        payload.validate()?;
        self.repo
            .insert_slide(
                &payload.title,
                payload.subtitle.as_deref(),
                &payload.image_url,
                payload.link_url.as_deref(),
                payload.sort_order,
            )
            .await
    }

    pub async fn update_slide(
        &self,
        id: i64,
        payload: UpdateHeroSlidePayload,
    ) -> Result<HeroSlide, AppError> {
        let mut slide = self.repo.find_slide(id).await?.ok_or(AppError::NotFound)?;

        if let Some(title) = payload.title {
            slide.title = title;
        }
        if let Some(subtitle) = payload.subtitle {
            slide.subtitle = Some(subtitle);
        }
        if let Some(image_url) = payload.image_url {
            slide.image_url = image_url;
        }
        if let Some(link_url) = payload.link_url {
            slide.link_url = Some(link_url);
        }
        if let Some(sort_order) = payload.sort_order {
            slide.sort_order = sort_order;
        }
        if let Some(is_active) = payload.is_active {
            slide.is_active = is_active;
        }

        self.repo.update_slide(&slide).await
    }

    pub async fn delete_slide(&self, id: i64) -> Result<(), AppError> {
        if !self.repo.delete_slide(id).await? {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    // --- Gallery ---

    pub async fn gallery(&self) -> Result<Vec<GalleryImage>, AppError> {
        self.repo.list_gallery().await
    }

    /// Stores the uploaded file under `uploads/gallery/` and records it.
    pub async fn add_gallery_image(
        &self,
        title: Option<String>,
        sort_order: i32,
        filename: &str,
        data: &[u8],
    ) -> Result<GalleryImage, AppError> {
        let image_url = self.storage.save("gallery", filename, data).await?;
        self.repo
            .insert_gallery_image(title.as_deref(), &image_url, sort_order)
            .await
    }

    pub async fn delete_gallery_image(&self, id: i64) -> Result<(), AppError> {
        if !self.repo.delete_gallery_image(id).await? {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    // --- Contact inbox ---

    pub async fn submit_contact(
        &self,
        payload: CreateContactPayload,
    ) -> Result<ContactMessage, AppError> {
        payload.validate()?;
        self.repo
            .insert_contact(
                &payload.name,
                &payload.email,
                payload.phone.as_deref(),
                payload.subject.as_deref(),
                &payload.message,
            )
            .await
    }

    pub async fn list_contacts(&self) -> Result<Vec<ContactMessage>, AppError> {
        self.repo.list_contacts().await
    }

    pub async fn mark_contact_read(&self, id: i64) -> Result<ContactMessage, AppError> {
        self.repo
            .mark_contact_read(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn delete_contact(&self, id: i64) -> Result<(), AppError> {
        if !self.repo.delete_contact(id).await? {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
