// src/services/settings_service.rs

use serde::Deserialize;

use crate::{
    common::error::AppError,
    db::SettingsRepository,
    models::content::{StoreSettings, UpdateStoreSettingsPayload},
};

#[derive(Debug, Deserialize)]
struct OembedResponse {
    title: String,
    thumbnail_url: Option<String>,
}

fn is_youtube_url(url: &str) -> bool {
    url.contains("youtube.com/") || url.contains("youtu.be/")
}

#[derive(Clone)]
pub struct SettingsService {
    settings_repo: SettingsRepository,
    http: reqwest::Client,
}

impl SettingsService {
    pub fn new(settings_repo: SettingsRepository) -> Self {
        Self { settings_repo, http: reqwest::Client::new() }
    }

    pub async fn get(&self) -> Result<StoreSettings, AppError> {
        self.settings_repo.get().await
    }

    /// Merges the payload onto the singleton row. A newly set YouTube promo
    /// link gets its oEmbed title/thumbnail fetched; a fetch failure only
    /// loses the metadata, never the update.
    pub async fn update(&self, payload: UpdateStoreSettingsPayload) -> Result<StoreSettings, AppError> {
        let mut settings = self.settings_repo.get().await?;

        if let Some(store_name) = payload.store_name {
            settings.store_name = store_name;
        }
        if let Some(phone) = payload.phone {
            settings.phone = phone;
        }
        if let Some(email) = payload.email {
            settings.email = email;
        }
        if let Some(address) = payload.address {
            settings.address = address;
        }
        if let Some(facebook_url) = payload.facebook_url {
            settings.facebook_url = Some(facebook_url).filter(|u| !u.is_empty());
        }
        if let Some(instagram_url) = payload.instagram_url {
            settings.instagram_url = Some(instagram_url).filter(|u| !u.is_empty());
        }
        if let Some(promo_enabled) = payload.promo_enabled {
            settings.promo_enabled = promo_enabled;
        }
        if let Some(promo_text) = payload.promo_text {
            settings.promo_text = Some(promo_text).filter(|t| !t.is_empty());
        }

        if let Some(video_url) = payload.promo_video_url {
            let video_url = Some(video_url).filter(|u| !u.is_empty());
            if video_url != settings.promo_video_url {
                settings.promo_video_title = None;
                settings.promo_video_thumbnail = None;
                if let Some(url) = &video_url {
                    if is_youtube_url(url) {
                        match self.fetch_oembed(url).await {
                            Ok(meta) => {
                                settings.promo_video_title = Some(meta.title);
                                settings.promo_video_thumbnail = meta.thumbnail_url;
                            }
                            Err(e) => {
                                tracing::warn!("oEmbed fetch failed for {}: {}", url, e);
                            }
                        }
                    }
                }
                settings.promo_video_url = video_url;
            }
        }

        self.settings_repo.upsert(&settings).await
    }

    async fn fetch_oembed(&self, video_url: &str) -> Result<OembedResponse, reqwest::Error> {
        self.http
            .get("https://www.youtube.com/oembed")
            .query(&[("url", video_url), ("format", "json")])
            .send()
            .await?
            .error_for_status()?
            .json::<OembedResponse>()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_url_detection() {
        assert!(is_youtube_url("https://www.youtube.com/watch?v=abc123"));
        assert!(is_youtube_url("https://youtu.be/abc123"));
        assert!(!is_youtube_url("https://vimeo.com/12345"));
    }
}
