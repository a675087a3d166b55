// src/services/storage.rs
//
// Disk storage for uploaded rasters. Files land under UPLOAD_DIR/<subdir>/
// with a timestamped name and are served statically under /uploads; only the
// URL path is ever stored in the database.

use std::path::PathBuf;

use chrono::Utc;

use crate::common::error::AppError;

/// 5 MB cap on incoming files.
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

pub const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Keeps alphanumerics, dash, underscore and dot; everything else collapses
/// to single dashes so the name is safe as a path segment.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
            out.push(c);
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    out.trim_matches('-').to_string()
}

/// Size cap, extension whitelist, then a real decode so a renamed
/// non-image is rejected before it reaches disk.
pub fn validate_image(data: &[u8], filename: &str) -> Result<(), AppError> {
    if data.is_empty() {
        return Err(AppError::InvalidUpload("The uploaded file is empty.".into()));
    }
    if data.len() > MAX_FILE_SIZE {
        return Err(AppError::InvalidUpload(format!(
            "The file is too large; the limit is {} MB.",
            MAX_FILE_SIZE / 1024 / 1024
        )));
    }

    let ext = PathBuf::from(filename)
        .extension()
        .and_then(|e| e.to_str().map(|s| s.to_lowercase()))
        .unwrap_or_default();
    if !SUPPORTED_FORMATS.contains(&ext.as_str()) {
        return Err(AppError::InvalidUpload(format!(
            "Unsupported file format '{}'. Supported: {}.",
            ext,
            SUPPORTED_FORMATS.join(", ")
        )));
    }

    if let Err(e) = image::load_from_memory(data) {
        return Err(AppError::InvalidUpload(format!("The file is not a valid image: {e}.")));
    }
    Ok(())
}

#[derive(Clone)]
pub struct ImageStorage {
    upload_dir: PathBuf,
}

impl ImageStorage {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self { upload_dir: upload_dir.into() }
    }

    /// Validates and writes the file, returning the served URL path
    /// (`/uploads/<subdir>/<name>`).
    pub async fn save(
        &self,
        subdir: &str,
        original_name: &str,
        data: &[u8],
    ) -> Result<String, AppError> {
        validate_image(data, original_name)?;

        let filename = format!(
            "{}-{}",
            Utc::now().timestamp_millis(),
            sanitize_filename(original_name)
        );

        let dir = self.upload_dir.join(subdir);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| anyhow::anyhow!("failed to create upload dir: {e}"))?;
        tokio::fs::write(dir.join(&filename), data)
            .await
            .map_err(|e| anyhow::anyhow!("failed to write upload: {e}"))?;

        Ok(format!("/uploads/{subdir}/{filename}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes() -> Vec<u8> {
        let img = image::RgbImage::new(2, 2);
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png).unwrap();
        buf
    }

    #[test]
    fn sanitize_strips_path_hostiles() {
        assert_eq!(sanitize_filename("my design (v2).png"), "my-design-v2-.png");
        assert_eq!(sanitize_filename("../../etc/passwd"), "..-..-etc-passwd");
        assert_eq!(sanitize_filename("wolf_panel.jpg"), "wolf_panel.jpg");
    }

    #[test]
    fn rejects_wrong_extension_and_fake_images() {
        let data = png_bytes();
        assert!(validate_image(&data, "design.png").is_ok());
        assert!(matches!(
            validate_image(&data, "design.gif"),
            Err(AppError::InvalidUpload(_))
        ));
        // A text file renamed to .png fails the decode check.
        assert!(matches!(
            validate_image(b"not an image at all", "design.png"),
            Err(AppError::InvalidUpload(_))
        ));
        assert!(matches!(validate_image(b"", "design.png"), Err(AppError::InvalidUpload(_))));
    }

    #[test]
    fn rejects_oversize_files() {
        let data = vec![0u8; MAX_FILE_SIZE + 1];
        assert!(matches!(
            validate_image(&data, "design.png"),
            Err(AppError::InvalidUpload(_))
        ));
    }

    #[tokio::test]
    async fn save_writes_under_subdir_and_returns_url_path() {
        let dir = tempfile::tempdir().unwrap();
        let storage = ImageStorage::new(dir.path());
        let url = storage.save("designs", "my design.png", &png_bytes()).await.unwrap();
        assert!(url.starts_with("/uploads/designs/"));
        assert!(url.ends_with("my-design.png"));

        let on_disk = dir.path().join("designs").join(url.rsplit('/').next().unwrap());
        assert!(on_disk.exists());
    }
}
