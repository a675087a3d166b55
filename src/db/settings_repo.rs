// src/db/settings_repo.rs

use chrono::Utc;
use sqlx::PgPool;

use crate::{common::error::AppError, models::content::StoreSettings};

// The settings table holds exactly one row, keyed to id = 1.
const SINGLETON_ID: i32 = 1;

#[derive(Clone)]
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Absence of the row reads as an empty default, never an error.
    pub async fn get(&self) -> Result<StoreSettings, AppError> {
        let settings =
            sqlx::query_as::<_, StoreSettings>("SELECT * FROM store_settings WHERE id = $1")
                .bind(SINGLETON_ID)
                .fetch_optional(&self.pool)
                .await?;

        Ok(settings.unwrap_or_else(|| StoreSettings {
            id: SINGLETON_ID,
            store_name: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            facebook_url: None,
            instagram_url: None,
            promo_enabled: false,
            promo_text: None,
            promo_video_url: None,
            promo_video_title: None,
            promo_video_thumbnail: None,
            updated_at: Utc::now(),
        }))
    }

    pub async fn upsert(&self, settings: &StoreSettings) -> Result<StoreSettings, AppError> {
        let updated = sqlx::query_as::<_, StoreSettings>(
            r#"
            INSERT INTO store_settings
                (id, store_name, phone, email, address, facebook_url, instagram_url,
                 promo_enabled, promo_text, promo_video_url, promo_video_title,
                 promo_video_thumbnail)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (id)
            DO UPDATE SET
                store_name = EXCLUDED.store_name,
                phone = EXCLUDED.phone,
                email = EXCLUDED.email,
                address = EXCLUDED.address,
                facebook_url = EXCLUDED.facebook_url,
                instagram_url = EXCLUDED.instagram_url,
                promo_enabled = EXCLUDED.promo_enabled,
                promo_text = EXCLUDED.promo_text,
                promo_video_url = EXCLUDED.promo_video_url,
                promo_video_title = EXCLUDED.promo_video_title,
                promo_video_thumbnail = EXCLUDED.promo_video_thumbnail,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(SINGLETON_ID)
        .bind(&settings.store_name)
        .bind(&settings.phone)
        .bind(&settings.email)
        .bind(&settings.address)
        .bind(settings.facebook_url.as_deref())
        .bind(settings.instagram_url.as_deref())
        .bind(settings.promo_enabled)
        .bind(settings.promo_text.as_deref())
        .bind(settings.promo_video_url.as_deref())
        .bind(settings.promo_video_title.as_deref())
        .bind(settings.promo_video_thumbnail.as_deref())
        .fetch_one(&self.pool)
        .await?;
        Ok(updated)
    }
}
