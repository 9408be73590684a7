//! JSON array history file.

use linkpost_core::PostRecord;
use linkpost_error::{LinkpostResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Append-only log of published posts backed by one JSON file.
///
/// The file is either absent (no posts yet) or a pretty-printed JSON array of
/// [`PostRecord`]s in publish order.
///
/// # Concurrency
///
/// Appends within this process are serialized by an internal mutex, so
/// concurrent callers never lose records. Other processes writing the same
/// file are not coordinated with; the last writer wins.
///
/// Rewrites go through a sibling temp file and a rename, so readers see
/// either the old or the new array, never a partial one.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl HistoryStore {
    /// Create a store for the history file at `path`.
    ///
    /// Nothing is created on disk until the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the history file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the history file exists.
    pub async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    /// Load every record in publish order.
    ///
    /// A missing file is an empty history.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read or is not a JSON
    /// array of post records.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load(&self) -> LinkpostResult<Vec<PostRecord>> {
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No history file yet");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
                .into());
            }
        };

        let records: Vec<PostRecord> = serde_json::from_slice(&data).map_err(|e| {
            StorageError::new(StorageErrorKind::Parse(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        tracing::debug!(count = records.len(), "Loaded post history");
        Ok(records)
    }

    /// Record a newly published post, stamped with the current UTC time.
    ///
    /// Reads the whole history, appends the record and writes the whole
    /// history back.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the existing history cannot be loaded or the
    /// new one cannot be written. The file is left unchanged on error.
    #[tracing::instrument(skip(self, content), fields(path = %self.path.display()))]
    pub async fn append(&self, content: &str, urn: &str) -> LinkpostResult<PostRecord> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load().await?;
        let record = PostRecord::published_now(urn, content);
        records.push(record.clone());
        self.write_all(&records).await?;

        tracing::info!(urn, total = records.len(), "Appended post to history");
        Ok(record)
    }

    async fn write_all(&self, records: &[PostRecord]) -> LinkpostResult<()> {
        let json = serde_json::to_vec_pretty(records).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "serialize history: {}",
                e
            )))
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, json).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;

        Ok(())
    }
}
