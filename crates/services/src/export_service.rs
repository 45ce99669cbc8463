use std::sync::Arc;

use storage::repository::{ExportReceipt, ExportSink};
use tracing::info;

use crate::error::ExportError;
use crate::export::{EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME, ResultExporter};
use crate::sessions::SurveySession;

/// Hands a session's result table to the configured export sink.
#[derive(Clone)]
pub struct ExportService {
    sink: Arc<dyn ExportSink>,
}

impl ExportService {
    #[must_use]
    pub fn new(sink: Arc<dyn ExportSink>) -> Self {
        Self { sink }
    }

    /// Export the session as `test_results.csv`.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if the table cannot be rendered or stored.
    pub async fn export_session(
        &self,
        session: &SurveySession,
    ) -> Result<ExportReceipt, ExportError> {
        let table = ResultExporter::export(session);
        let csv = table.to_csv()?;
        let receipt = self
            .sink
            .save(EXPORT_FILE_NAME, EXPORT_CONTENT_TYPE, csv.as_bytes())
            .await?;
        info!(rows = table.len(), file = %receipt.file_name, "results exported");
        Ok(receipt)
    }
}
