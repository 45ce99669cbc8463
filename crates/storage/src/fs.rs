use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::repository::{ExportReceipt, ExportSink, StorageError, validate_file_name};

/// Writes exports as files inside a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct FileExportSink {
    dir: PathBuf,
}

impl FileExportSink {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl ExportSink for FileExportSink {
    async fn save(
        &self,
        file_name: &str,
        content_type: &str,
        contents: &[u8],
    ) -> Result<ExportReceipt, StorageError> {
        validate_file_name(file_name)?;
        tokio::fs::create_dir_all(&self.dir).await?;

        let path = self.dir.join(file_name);
        tokio::fs::write(&path, contents).await?;
        let location = tokio::fs::canonicalize(&path).await.unwrap_or(path);
        info!(path = %location.display(), bytes = contents.len(), "export written");

        Ok(ExportReceipt {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            bytes: contents.len(),
            location: Some(location),
        })
    }
}
