//! Flattening of a session's responses into one downloadable table.

use serde::Serialize;

use survey_core::model::{ItemId, Phase};
use survey_core::FoolRate;

use crate::error::ExportError;
use crate::sessions::SurveySession;

pub const EXPORT_FILE_NAME: &str = "test_results.csv";
pub const EXPORT_CONTENT_TYPE: &str = "text/csv";
pub const NOT_APPLICABLE: &str = "N/A";

const COLUMNS: [&str; 7] = [
    "question",
    "phase",
    "image_index",
    "response",
    "correct_answer",
    "fool_rate",
    "problems",
];

/// One answered question. Field order matches the CSV columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    /// 1-based, continuous across both phases.
    pub question: usize,
    pub phase: Phase,
    pub image_index: ItemId,
    pub response: String,
    pub correct_answer: String,
    pub fool_rate: String,
    pub problems: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    #[must_use]
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render as UTF-8 CSV with a header row, even when there are no rows.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if a row cannot be serialized.
    pub fn to_csv(&self) -> Result<String, ExportError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(COLUMNS)?;
        for row in &self.rows {
            writer.serialize(row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|err| ExportError::Flush(err.to_string()))?;
        Ok(String::from_utf8(bytes)?)
    }
}

pub struct ResultExporter;

impl ResultExporter {
    /// One row per answered question across both phases.
    ///
    /// Exporting before results yields the rows answered so far.
    #[must_use]
    pub fn export(session: &SurveySession) -> ResultTable {
        let fool_rate = session
            .fool_rate()
            .ok()
            .map_or_else(|| NOT_APPLICABLE.to_string(), FoolRate::to_fixed);

        let comparison = session.comparison_responses().iter().map(|r| {
            (
                Phase::Comparison,
                r.item_id,
                r.response.to_string(),
                r.correct_answer.to_string(),
                fool_rate.clone(),
                String::new(),
            )
        });
        let preservation = session.preservation_responses().iter().map(|r| {
            (
                Phase::Preservation,
                r.item_id,
                r.judgment.to_string(),
                NOT_APPLICABLE.to_string(),
                NOT_APPLICABLE.to_string(),
                r.problems.clone(),
            )
        });

        let rows = comparison
            .chain(preservation)
            .enumerate()
            .map(
                |(idx, (phase, image_index, response, correct_answer, fool_rate, problems))| {
                    ResultRow {
                        question: idx + 1,
                        phase,
                        image_index,
                        response,
                        correct_answer,
                        fool_rate,
                        problems,
                    }
                },
            )
            .collect();

        ResultTable { rows }
    }
}
