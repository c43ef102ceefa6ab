//! JSON file-backed implementation of `MoodHistoryRepository`.
//!
//! The whole history lives in one document that is rewritten on every append
//! through [`AtomicFile`], so readers never observe a half-written file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use mood_core::error::{MoodError, Result};
use mood_core::mood::{MoodHistoryRepository, MoodRecord, recent_suffix};

use crate::dto::{MoodHistoryDto, MoodRecordDto};
use crate::paths::MoodPaths;
use crate::storage::{AtomicFile, AtomicFileError, FileFormat};

/// Stores the mood history as pretty-printed JSON.
///
/// Clones share one write queue. Separate stores on the same file are
/// serialized by the lock file instead.
#[derive(Clone)]
pub struct JsonMoodHistoryRepository {
    file: Arc<AtomicFile<MoodHistoryDto>>,
    write_lock: Arc<Mutex<()>>,
}

impl JsonMoodHistoryRepository {
    /// Creates a repository backed by `path`. The file is created on first append.
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicFile::new(path, FileFormat::Json)),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Creates a repository at the platform default location.
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(MoodPaths::history_file()?))
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    fn load_sync(file: &AtomicFile<MoodHistoryDto>) -> Result<Option<Vec<MoodRecord>>> {
        let loaded = file
            .load()
            .map_err(|e| map_storage_error(file.path(), e))?;
        Ok(loaded.map(MoodHistoryDto::into_records))
    }

    async fn load_blocking(&self) -> Result<Option<Vec<MoodRecord>>> {
        let file = Arc::clone(&self.file);
        tokio::task::spawn_blocking(move || Self::load_sync(&file))
            .await
            .map_err(|e| MoodError::internal(format!("Failed to join task: {}", e)))?
    }
}

fn map_storage_error(path: &Path, err: AtomicFileError) -> MoodError {
    match err {
        AtomicFileError::ParseError { message, .. } => {
            MoodError::corrupt_store(path.display().to_string(), message)
        }
        AtomicFileError::SerializeError { format, message } => MoodError::Serialization {
            format: format.name().to_string(),
            message,
        },
        AtomicFileError::IoError(e) => e.into(),
        AtomicFileError::LockError(message) => MoodError::io(message),
    }
}

#[async_trait]
impl MoodHistoryRepository for JsonMoodHistoryRepository {
    async fn append(&self, record: &MoodRecord) -> Result<()> {
        let file = Arc::clone(&self.file);
        let dto: MoodRecordDto = record.into();

        let _write = self.write_lock.lock().await;
        tokio::task::spawn_blocking(move || {
            file.update(MoodHistoryDto::default(), |history| {
                history.mood_data_list.push(dto);
                Ok(())
            })
            .map_err(|e| map_storage_error(file.path(), e))
        })
        .await
        .map_err(|e| MoodError::internal(format!("Failed to join task: {}", e)))??;

        tracing::info!(
            path = %self.path().display(),
            day = %record.day,
            "Mood record saved"
        );
        Ok(())
    }

    async fn load_recent(&self, n: usize) -> Result<Option<Vec<MoodRecord>>> {
        let history = self.load_blocking().await?;
        Ok(history.map(|all| recent_suffix(&all, n).to_vec()))
    }

    async fn load_all(&self) -> Result<Option<Vec<MoodRecord>>> {
        self.load_blocking().await
    }
}
