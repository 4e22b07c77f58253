use crate::errors::{AppError, Result};
use crate::utils::validation::Validator;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::info;

/// Where an accepted upload ended up and how to reach it.
#[derive(Debug, Clone)]
pub struct StoredUpload {
    pub url: String,
    pub filename: String,
    pub size: u64,
    pub content_type: String,
}

/// Writes uploaded files under a public directory served at `/uploads`.
/// Files are written once and never deleted or deduplicated.
pub struct UploadService {
    upload_dir: PathBuf,
}

impl UploadService {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Stores one uploaded file under a timestamp-prefixed sanitized name
    /// and returns its public URL.
    pub async fn store(
        &self,
        original_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<StoredUpload> {
        let sanitized = Validator::sanitize_filename(original_name);
        let filename = format!("{}-{}", Utc::now().timestamp_millis(), sanitized);
        let path = self.upload_dir.join(&filename);

        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|e| {
                AppError::UploadError(format!("Failed to create upload directory: {}", e))
            })?;
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| AppError::UploadError(format!("Failed to write {}: {}", filename, e)))?;

        info!(action = "file_uploaded", filename = %filename, size = data.len());
        Ok(StoredUpload {
            url: format!("/uploads/{}", filename),
            filename,
            size: data.len() as u64,
            content_type: content_type.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn stores_under_timestamped_sanitized_name() {
        let dir = TempDir::new().unwrap();
        let service = UploadService::new(dir.path());
        let stored = service
            .store("a b?.png", "image/png", b"\x89PNG")
            .await
            .unwrap();

        let (prefix, rest) = stored.filename.split_once('-').unwrap();
        assert!(prefix.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(rest, "ab.png");
        assert_eq!(stored.url, format!("/uploads/{}", stored.filename));
        assert_eq!(stored.size, 4);

        let on_disk = std::fs::read(dir.path().join(&stored.filename)).unwrap();
        assert_eq!(on_disk, b"\x89PNG");
    }

    #[tokio::test]
    async fn fully_sanitized_name_still_stores() {
        let dir = TempDir::new().unwrap();
        let service = UploadService::new(dir.path());
        let stored = service.store("日本語", "image/jpeg", b"x").await.unwrap();
        // Name degenerates to "<timestamp>-"; kept as-is rather than invented.
        assert!(stored.filename.ends_with('-'));
        assert!(dir.path().join(&stored.filename).exists());
    }
}
