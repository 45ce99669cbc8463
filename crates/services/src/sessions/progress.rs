use survey_core::model::Phase;

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyProgress {
    pub phase: Phase,
    pub answered: usize,
    pub total: usize,
    pub remaining: usize,
    pub awaiting_continue: bool,
}
