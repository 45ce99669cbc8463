use survey_core::FoolRate;
use survey_core::model::{
    ComparisonQuestion, ComparisonResponse, Phase, PreservationQuestion, PreservationResponse,
};

use crate::error::SessionError;
use super::plan::QuestionSets;
use super::progress::SurveyProgress;

/// State of one rater's survey session.
///
/// Readable by anyone; only the controller in this module mutates it. One
/// instance per client, never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveySession {
    phase: Phase,
    question_index: usize,
    comparison_questions: Vec<ComparisonQuestion>,
    preservation_questions: Vec<PreservationQuestion>,
    comparison_responses: Vec<ComparisonResponse>,
    preservation_responses: Vec<PreservationResponse>,
}

impl SurveySession {
    /// Fresh session in the intro phase with no questions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Intro,
            question_index: 0,
            comparison_questions: Vec::new(),
            preservation_questions: Vec::new(),
            comparison_responses: Vec::new(),
            preservation_responses: Vec::new(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    #[must_use]
    pub fn comparison_questions(&self) -> &[ComparisonQuestion] {
        &self.comparison_questions
    }

    #[must_use]
    pub fn preservation_questions(&self) -> &[PreservationQuestion] {
        &self.preservation_questions
    }

    #[must_use]
    pub fn comparison_responses(&self) -> &[ComparisonResponse] {
        &self.comparison_responses
    }

    #[must_use]
    pub fn preservation_responses(&self) -> &[PreservationResponse] {
        &self.preservation_responses
    }

    /// Number of questions in the current phase. Zero for intro and results.
    #[must_use]
    pub fn phase_len(&self) -> usize {
        match self.phase {
            Phase::Comparison => self.comparison_questions.len(),
            Phase::Preservation => self.preservation_questions.len(),
            Phase::Intro | Phase::Results => 0,
        }
    }

    fn phase_answered(&self) -> usize {
        match self.phase {
            Phase::Comparison => self.comparison_responses.len(),
            Phase::Preservation => self.preservation_responses.len(),
            Phase::Intro | Phase::Results => 0,
        }
    }

    /// True once every question of a question phase is answered and the
    /// session waits for an explicit continue.
    #[must_use]
    pub fn is_awaiting_continue(&self) -> bool {
        matches!(self.phase, Phase::Comparison | Phase::Preservation)
            && self.question_index >= self.phase_len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase.is_terminal()
    }

    #[must_use]
    pub fn current_comparison(&self) -> Option<&ComparisonQuestion> {
        if self.phase == Phase::Comparison {
            self.comparison_questions.get(self.question_index)
        } else {
            None
        }
    }

    #[must_use]
    pub fn current_preservation(&self) -> Option<&PreservationQuestion> {
        if self.phase == Phase::Preservation {
            self.preservation_questions.get(self.question_index)
        } else {
            None
        }
    }

    /// Fool rate over the comparison responses recorded so far.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyResponseSet` before the first comparison answer.
    pub fn fool_rate(&self) -> Result<FoolRate, SessionError> {
        Ok(FoolRate::from_responses(&self.comparison_responses)?)
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SurveyProgress {
        let total = self.phase_len();
        let answered = self.phase_answered();
        SurveyProgress {
            phase: self.phase,
            answered,
            total,
            remaining: total.saturating_sub(answered),
            awaiting_continue: self.is_awaiting_continue(),
        }
    }

    pub(super) fn begin(&mut self, sets: QuestionSets) {
        self.comparison_questions = sets.comparison;
        self.preservation_questions = sets.preservation;
        self.comparison_responses.clear();
        self.preservation_responses.clear();
        self.phase = Phase::Comparison;
        self.question_index = 0;
    }

    pub(super) fn record_comparison(&mut self, response: ComparisonResponse) {
        self.comparison_responses.push(response);
        self.question_index += 1;
    }

    pub(super) fn record_preservation(&mut self, response: PreservationResponse) {
        self.preservation_responses.push(response);
        self.question_index += 1;
    }

    pub(super) fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.question_index = 0;
    }
}

impl Default for SurveySession {
    fn default() -> Self {
        Self::new()
    }
}
