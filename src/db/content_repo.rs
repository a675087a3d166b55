// src/db/content_repo.rs
//
// Hero slides, gallery images and the contact inbox: independent rows with
// no cross-entity invariants, handled by one repository.

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::content::{ContactMessage, GalleryImage, HeroSlide},
};

#[derive(Clone)]
pub struct ContentRepository {
    pool: PgPool,
}

impl ContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // --- Hero slides ---

    pub async fn list_active_slides(&self) -> Result<Vec<HeroSlide>, AppError> {
        let slides = sqlx::query_as::<_, HeroSlide>(
            "SELECT * FROM hero_slides WHERE is_active = TRUE ORDER BY sort_order ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(slides)
    }

    pub async fn list_slides(&self) -> Result<Vec<HeroSlide>, AppError> {
        let slides =
            sqlx::query_as::<_, HeroSlide>("SELECT * FROM hero_slides ORDER BY sort_order ASC, id ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(slides)
    }

    pub async fn find_slide(&self, id: i64) -> Result<Option<HeroSlide>, AppError> {
        let slide = sqlx::query_as::<_, HeroSlide>("SELECT * FROM hero_slides WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(slide)
    }

    pub async fn insert_slide(
        &self,
        title: &str,
        subtitle: Option<&str>,
        image_url: &str,
        link_url: Option<&str>,
        sort_order: i32,
    ) -> Result<HeroSlide, AppError> {
        let slide = sqlx::query_as::<_, HeroSlide>(
            r#"
            INSERT INTO hero_slides (title, subtitle, image_url, link_url, sort_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(subtitle)
        .bind(image_url)
        .bind(link_url)
        .bind(sort_order)
        .fetch_one(&self.pool)
        .await?;
        Ok(slide)
    }

    pub async fn update_slide(&self, slide: &HeroSlide) -> Result<HeroSlide, AppError> {
        let updated = sqlx::query_as::<_, HeroSlide>(
            r#"
            UPDATE hero_slides SET
                title = $2, subtitle = $3, image_url = $4, link_url = $5,
                sort_order = $6, is_active = $7, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(slide.id)
        .bind(&slide.title)
        .bind(slide.subtitle.as_deref())
        .bind(&slide.image_url)
        .bind(slide.link_url.as_deref())
        .bind(slide.sort_order)
        .bind(slide.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(updated)
    }

    pub async fn delete_slide(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM hero_slides WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // --- Gallery ---

    pub async fn list_gallery(&self) -> Result<Vec<GalleryImage>, AppError> {
        let images = sqlx::query_as::<_, GalleryImage>(
            "SELECT * FROM gallery_images ORDER BY sort_order ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(images)
    }

    pub async fn insert_gallery_image(
        &self,
        title: Option<&str>,
        image_url: &str,
        sort_order: i32,
    ) -> Result<GalleryImage, AppError> {
        let image = sqlx::query_as::<_, GalleryImage>(
            r#"
            INSERT INTO gallery_images (title, image_url, sort_order)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(image_url)
        .bind(sort_order)
        .fetch_one(&self.pool)
        .await?;
        Ok(image)
    }

    pub async fn delete_gallery_image(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM gallery_images WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // --- Contact inbox ---

    pub async fn insert_contact(
        &self,
        name: &str,
        email: &str,
        phone: Option<&str>,
        subject: Option<&str>,
        message: &str,
    ) -> Result<ContactMessage, AppError> {
        let contact = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (name, email, phone, subject, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(subject)
        .bind(message)
        .fetch_one(&self.pool)
        .await?;
        Ok(contact)
    }

    pub async fn list_contacts(&self) -> Result<Vec<ContactMessage>, AppError> {
        let contacts = sqlx::query_as::<_, ContactMessage>(
            "SELECT * FROM contact_messages ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(contacts)
    }

    pub async fn mark_contact_read(&self, id: i64) -> Result<Option<ContactMessage>, AppError> {
        let contact = sqlx::query_as::<_, ContactMessage>(
            "UPDATE contact_messages SET is_read = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(contact)
    }

    pub async fn delete_contact(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
