use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::fs::FileExportSink;

/// Errors surfaced by export sinks.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("invalid export file name: {0:?}")]
    InvalidName(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("connection error: {0}")]
    Connection(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

/// Where an exported artifact ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub file_name: String,
    pub content_type: String,
    pub bytes: usize,
    /// Filesystem location, when the sink writes to disk.
    pub location: Option<PathBuf>,
}

/// A stored export artifact, as kept by the in-memory sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub content_type: String,
    pub contents: Vec<u8>,
}

/// Destination for downloadable result tables.
#[async_trait]
pub trait ExportSink: Send + Sync {
    /// Store `contents` under `file_name`, replacing any earlier artifact of that name.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidName` for empty names or names with path
    /// separators, or other storage errors.
    async fn save(
        &self,
        file_name: &str,
        content_type: &str,
        contents: &[u8],
    ) -> Result<ExportReceipt, StorageError>;
}

/// Rejects names that are empty or would escape the sink's directory.
pub(crate) fn validate_file_name(file_name: &str) -> Result<(), StorageError> {
    let trimmed = file_name.trim();
    let escapes = trimmed.contains(['/', '\\']) || trimmed == "." || trimmed == "..";
    if trimmed.is_empty() || escapes || trimmed != file_name {
        return Err(StorageError::InvalidName(file_name.to_string()));
    }
    Ok(())
}

/// Simple in-memory sink for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryExportSink {
    artifacts: Arc<Mutex<HashMap<String, ExportArtifact>>>,
}

impl InMemoryExportSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a stored artifact by file name.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn get(&self, file_name: &str) -> Result<Option<ExportArtifact>, StorageError> {
        let guard = self
            .artifacts
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(file_name).cloned())
    }
}

#[async_trait]
impl ExportSink for InMemoryExportSink {
    async fn save(
        &self,
        file_name: &str,
        content_type: &str,
        contents: &[u8],
    ) -> Result<ExportReceipt, StorageError> {
        validate_file_name(file_name)?;
        let mut guard = self
            .artifacts
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(
            file_name.to_string(),
            ExportArtifact {
                content_type: content_type.to_string(),
                contents: contents.to_vec(),
            },
        );
        Ok(ExportReceipt {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            bytes: contents.len(),
            location: None,
        })
    }
}

/// Export sink behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub exports: Arc<dyn ExportSink>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            exports: Arc::new(InMemoryExportSink::new()),
        }
    }

    #[must_use]
    pub fn filesystem(dir: impl AsRef<Path>) -> Self {
        Self {
            exports: Arc::new(FileExportSink::new(dir.as_ref())),
        }
    }
}
