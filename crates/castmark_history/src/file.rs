//! Single-file JSON history store.

use castmark_core::HistoryEntry;
use castmark_error::{CastmarkResult, HistoryError, HistoryErrorKind};
use castmark_interface::HistoryStore;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Maximum number of entries kept; appending past this evicts the oldest.
pub const HISTORY_CAPACITY: usize = 20;

/// File-backed history store.
///
/// The whole history lives in one JSON file as a newest-first array. A
/// missing or unreadable file loads as an empty list; the next append
/// rewrites it. Writes go to a temp file first and are renamed into place
/// for atomicity.
pub struct FileHistory {
    path: PathBuf,
    // Serializes read-modify-write cycles across concurrent callers.
    write_lock: Mutex<()>,
}

impl FileHistory {
    /// Create a store backed by the given file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    #[tracing::instrument(skip(path))]
    pub fn new(path: impl Into<PathBuf>) -> CastmarkResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                HistoryError::new(HistoryErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        tracing::info!(path = %path.display(), "Opened file history");
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Vec<HistoryEntry> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_slice(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "History file is not valid JSON, treating as empty"
                );
                Vec::new()
            }
        }
    }

    async fn write_entries(&self, entries: &[HistoryEntry]) -> CastmarkResult<()> {
        let json = serde_json::to_vec_pretty(entries)
            .map_err(|e| HistoryError::new(HistoryErrorKind::Serialize(e.to_string())))?;

        // Write to temp file first, then rename for atomicity
        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, &json).await.map_err(|e| {
            HistoryError::new(HistoryErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            HistoryError::new(HistoryErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl HistoryStore for FileHistory {
    #[tracing::instrument(skip(self))]
    async fn load(&self) -> CastmarkResult<Vec<HistoryEntry>> {
        Ok(self.read_entries().await)
    }

    #[tracing::instrument(skip(self, entry), fields(entry_id = %entry.id))]
    async fn append(&self, entry: HistoryEntry) -> CastmarkResult<HistoryEntry> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_entries().await;
        entries.insert(0, entry.clone());
        entries.truncate(HISTORY_CAPACITY);
        self.write_entries(&entries).await?;

        tracing::info!(
            entry_id = %entry.id,
            total = entries.len(),
            "Appended history entry"
        );
        Ok(entry)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: &str) -> CastmarkResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_entries().await;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Err(HistoryError::new(HistoryErrorKind::NotFound(id.to_string())).into());
        }
        self.write_entries(&entries).await?;

        tracing::info!(entry_id = %id, "Deleted history entry");
        Ok(())
    }

    #[tracing::instrument(skip(self, custom_title))]
    async fn rename(&self, id: &str, custom_title: Option<String>) -> CastmarkResult<HistoryEntry> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_entries().await;
        let entry = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| HistoryError::new(HistoryErrorKind::NotFound(id.to_string())))?;

        // A blank title clears the override.
        entry.custom_title = custom_title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        let updated = entry.clone();
        self.write_entries(&entries).await?;

        tracing::info!(entry_id = %id, "Renamed history entry");
        Ok(updated)
    }
}
