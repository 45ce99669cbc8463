use std::sync::Arc;

use services::{
    ExportService, SurveyAction, SurveyController, SurveyOutcome, SurveyScreen,
    SurveySession,
};
use storage::repository::ExportReceipt;
use survey_core::model::{Phase, PreservationJudgment, Side};
use tracing::warn;

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurveyIntent {
    Start,
    SelectSide(Side),
    SelectJudgment(PreservationJudgment),
    EditProblems(String),
    /// Submit the pending answer for the current question.
    Next,
    Continue,
}

/// One rater's session plus the not-yet-submitted inputs of the current question.
pub struct SurveyVm {
    controller: Arc<SurveyController>,
    session: SurveySession,
    selected_side: Option<Side>,
    judgment: Option<PreservationJudgment>,
    problems: String,
    notice: Option<ViewError>,
}

impl SurveyVm {
    #[must_use]
    pub fn new(controller: Arc<SurveyController>) -> Self {
        let session = controller.new_session();
        Self {
            controller,
            session,
            selected_side: None,
            judgment: None,
            problems: String::new(),
            notice: None,
        }
    }

    #[must_use]
    pub fn screen(&self) -> SurveyScreen {
        self.controller.screen(&self.session)
    }

    #[must_use]
    pub fn session(&self) -> &SurveySession {
        &self.session
    }

    #[must_use]
    pub fn selected_side(&self) -> Option<Side> {
        self.selected_side
    }

    #[must_use]
    pub fn judgment(&self) -> Option<PreservationJudgment> {
        self.judgment
    }

    #[must_use]
    pub fn problems(&self) -> &str {
        &self.problems
    }

    /// Last rejected action, shown until the next successful one.
    #[must_use]
    pub fn notice(&self) -> Option<ViewError> {
        self.notice
    }

    /// Whether the pending inputs are enough to submit the current question.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        match self.session.phase() {
            Phase::Comparison => self.selected_side.is_some(),
            Phase::Preservation => self.judgment.is_some(),
            Phase::Intro | Phase::Results => false,
        }
    }

    /// Apply a rater intent. Selection intents only update pending inputs;
    /// the rest go through the controller.
    ///
    /// # Errors
    ///
    /// Returns the `ViewError` for a rejected action, also kept as `notice`.
    pub fn apply(&mut self, intent: SurveyIntent) -> Result<Option<SurveyOutcome>, ViewError> {
        let action = match intent {
            SurveyIntent::SelectSide(side) => {
                self.selected_side = Some(side);
                return Ok(None);
            }
            SurveyIntent::SelectJudgment(judgment) => {
                self.judgment = Some(judgment);
                return Ok(None);
            }
            SurveyIntent::EditProblems(text) => {
                self.problems = text;
                return Ok(None);
            }
            SurveyIntent::Start => SurveyAction::Start,
            SurveyIntent::Continue => SurveyAction::Continue,
            SurveyIntent::Next => match self.session.phase() {
                Phase::Preservation => SurveyAction::SubmitPreservation {
                    judgment: self.judgment,
                    problems: self.problems.clone(),
                },
                _ => SurveyAction::SubmitComparison(self.selected_side),
            },
        };

        match self.controller.dispatch(&mut self.session, action) {
            Ok(outcome) => {
                self.notice = None;
                if matches!(
                    outcome,
                    SurveyOutcome::Answered { .. } | SurveyOutcome::PhaseFinished { .. }
                ) {
                    self.clear_pending();
                }
                Ok(Some(outcome))
            }
            Err(err) => {
                let view_err = ViewError::from(&err);
                self.notice = Some(view_err);
                Err(view_err)
            }
        }
    }

    fn clear_pending(&mut self) {
        self.selected_side = None;
        self.judgment = None;
        self.problems.clear();
    }
}

/// Export a snapshot of the session through the configured sink.
///
/// # Errors
///
/// Returns `ViewError::ExportFailed` if rendering or saving fails.
pub async fn export_results(
    exports: &ExportService,
    session: &SurveySession,
) -> Result<ExportReceipt, ViewError> {
    exports.export_session(session).await.map_err(|err| {
        warn!(error = %err, "export failed");
        ViewError::ExportFailed
    })
}
