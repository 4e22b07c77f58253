use crate::errors::{AppError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::error;

/// One named collection backed by a single JSON array file.
///
/// Every operation re-reads the whole file and every mutation rewrites it.
/// There is no locking and no atomic rename: two concurrent writers race and
/// the last write wins. That is the accepted contract for this store (single
/// admin, low traffic) and is covered by a regression test rather than fixed.
pub struct JsonCollection<T> {
    name: &'static str,
    path: PathBuf,
    seed: Vec<T>,
    _marker: PhantomData<T>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    pub fn new(name: &'static str, data_dir: &Path, seed: Vec<T>) -> Self {
        Self {
            name,
            path: data_dir.join(format!("{}.json", name)),
            seed,
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the backing file with the seed content if it does not exist.
    pub async fn ensure(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::StoreError(format!(
                    "Failed to create data directory for {}: {}",
                    self.name, e
                ))
            })?;
        }
        if tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(());
        }
        let initial = serde_json::to_string_pretty(&self.seed)?;
        tokio::fs::write(&self.path, initial).await.map_err(|e| {
            AppError::StoreError(format!("Failed to initialize {}: {}", self.name, e))
        })?;
        Ok(())
    }

    /// Reads the full sequence. I/O and parse failures propagate.
    pub async fn read(&self) -> Result<Vec<T>> {
        self.ensure().await?;
        let data = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| AppError::StoreError(format!("Failed to read {}: {}", self.name, e)))?;
        let records = serde_json::from_str(&data)?;
        Ok(records)
    }

    /// Reads the full sequence, degrading to an empty one on any failure.
    /// The error is logged, not surfaced.
    pub async fn read_or_empty(&self) -> Vec<T> {
        match self.read().await {
            Ok(records) => records,
            Err(e) => {
                error!(action = "collection_read_failed", collection = self.name, error = %e);
                Vec::new()
            }
        }
    }

    /// Serializes the full sequence back to the file, overwriting it.
    pub async fn write(&self, records: &[T]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::StoreError(format!(
                    "Failed to create data directory for {}: {}",
                    self.name, e
                ))
            })?;
        }
        let data = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.path, data)
            .await
            .map_err(|e| AppError::StoreError(format!("Failed to write {}: {}", self.name, e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn collection(dir: &TempDir, seed: Vec<String>) -> JsonCollection<String> {
        JsonCollection::new("things", dir.path(), seed)
    }

    #[tokio::test]
    async fn absent_file_is_initialized_with_seed() {
        let dir = TempDir::new().unwrap();
        let col = collection(&dir, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(col.read().await.unwrap(), vec!["a", "b"]);
        assert!(col.path().exists());
    }

    #[tokio::test]
    async fn write_then_read_roundtrips() {
        let dir = TempDir::new().unwrap();
        let col = collection(&dir, Vec::new());
        col.write(&["x".to_string()]).await.unwrap();
        assert_eq!(col.read().await.unwrap(), vec!["x"]);
    }

    #[tokio::test]
    async fn corrupt_file_propagates_from_read() {
        let dir = TempDir::new().unwrap();
        let col = collection(&dir, Vec::new());
        std::fs::write(col.path(), "not json").unwrap();
        assert!(col.read().await.is_err());
    }

    #[tokio::test]
    async fn corrupt_file_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let col = collection(&dir, Vec::new());
        std::fs::write(col.path(), "{broken").unwrap();
        assert!(col.read_or_empty().await.is_empty());
    }

    #[tokio::test]
    async fn ensure_does_not_clobber_existing_data() {
        let dir = TempDir::new().unwrap();
        let col = collection(&dir, vec!["seed".to_string()]);
        col.write(&["kept".to_string()]).await.unwrap();
        col.ensure().await.unwrap();
        assert_eq!(col.read().await.unwrap(), vec!["kept"]);
    }
}
