use rand::Rng;
use tracing::{debug, info, warn};

use survey_core::model::{
    ComparisonResponse, Phase, PreservationJudgment, PreservationResponse, Side,
};
use survey_core::{FoolRate, SurveyConfig};

use crate::error::SessionError;
use super::plan::QuestionSetBuilder;
use super::state::SurveySession;
use super::view::SurveyScreen;

/// A rater intent. Each one maps to exactly one state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyAction {
    /// Leave the intro: build question sets and enter the comparison phase.
    Start,
    /// Answer the current comparison question. `None` means nothing was selected.
    SubmitComparison(Option<Side>),
    /// Answer the current preservation question. `problems` may be empty.
    SubmitPreservation {
        judgment: Option<PreservationJudgment>,
        problems: String,
    },
    /// Confirm the end of a question phase and move to the next phase.
    Continue,
}

impl SurveyAction {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SurveyAction::Start => "start",
            SurveyAction::SubmitComparison(_) => "submit comparison",
            SurveyAction::SubmitPreservation { .. } => "submit preservation",
            SurveyAction::Continue => "continue",
        }
    }
}

/// What a successful dispatch did to the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurveyOutcome {
    /// Question sets were built and the comparison phase began.
    Started {
        comparison_total: usize,
        preservation_total: usize,
    },
    /// An answer was recorded and more questions remain in this phase.
    Answered { phase: Phase, remaining: usize },
    /// The last answer of a phase was recorded; waiting for `Continue`.
    PhaseFinished {
        phase: Phase,
        fool_rate: Option<FoolRate>,
    },
    /// `Continue` moved the session into a new phase.
    Entered(Phase),
}

/// Drives a `SurveySession` through intro, comparison, preservation and results.
///
/// Both question phases end with an explicit `Continue`, so the rater sees the
/// fool rate after comparison and confirms before results.
#[derive(Debug, Clone)]
pub struct SurveyController {
    config: SurveyConfig,
}

impl SurveyController {
    #[must_use]
    pub fn new(config: SurveyConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SurveyConfig {
        &self.config
    }

    /// Independently initialized session for a newly connected rater.
    #[must_use]
    pub fn new_session(&self) -> SurveySession {
        SurveySession::new()
    }

    /// Screen the display collaborator should render for `session`.
    #[must_use]
    pub fn screen(&self, session: &SurveySession) -> SurveyScreen {
        SurveyScreen::for_session(session, self.config.selection())
    }

    /// Apply `action` using the thread-local random source.
    ///
    /// # Errors
    ///
    /// See [`SurveyController::dispatch_with_rng`].
    pub fn dispatch(
        &self,
        session: &mut SurveySession,
        action: SurveyAction,
    ) -> Result<SurveyOutcome, SessionError> {
        let mut rng = rand::rng();
        self.dispatch_with_rng(session, action, &mut rng)
    }

    /// Apply `action` to `session`. A rejected action leaves the session untouched.
    ///
    /// # Errors
    ///
    /// - `SessionError::InvalidInput` when an answer is submitted without a selection.
    /// - `SessionError::InsufficientPool` when sampling cannot fill a phase at start.
    /// - `SessionError::UnexpectedAction` when the action does not fit the phase.
    /// - `SessionError::Completed` for any action once results are reached.
    pub fn dispatch_with_rng<R: Rng + ?Sized>(
        &self,
        session: &mut SurveySession,
        action: SurveyAction,
        rng: &mut R,
    ) -> Result<SurveyOutcome, SessionError> {
        let phase = session.phase();
        if phase.is_terminal() {
            return Err(SessionError::Completed);
        }

        match (phase, action) {
            (Phase::Intro, SurveyAction::Start) => self.start(session, rng),
            (Phase::Comparison, SurveyAction::SubmitComparison(choice))
                if !session.is_awaiting_continue() =>
            {
                Self::answer_comparison(session, choice)
            }
            (Phase::Preservation, SurveyAction::SubmitPreservation { judgment, problems })
                if !session.is_awaiting_continue() =>
            {
                Self::answer_preservation(session, judgment, problems)
            }
            (Phase::Comparison | Phase::Preservation, SurveyAction::Continue)
                if session.is_awaiting_continue() =>
            {
                let next = phase.next().unwrap_or(Phase::Results);
                session.enter(next);
                info!(from = %phase, to = %next, "survey phase advanced");
                Ok(SurveyOutcome::Entered(next))
            }
            (phase, action) => {
                debug!(%phase, action = action.name(), "rejected out-of-phase action");
                Err(SessionError::UnexpectedAction {
                    phase,
                    action: action.name(),
                })
            }
        }
    }

    fn start<R: Rng + ?Sized>(
        &self,
        session: &mut SurveySession,
        rng: &mut R,
    ) -> Result<SurveyOutcome, SessionError> {
        let builder = QuestionSetBuilder::new(self.config.assets());
        let sets = builder.build_sets(self.config.selection(), rng).map_err(|err| {
            warn!(error = %err, "failed to build question sets");
            err
        })?;

        let comparison_total = sets.comparison.len();
        let preservation_total = sets.preservation.len();
        session.begin(sets);
        info!(comparison_total, preservation_total, "survey session started");

        Ok(SurveyOutcome::Started {
            comparison_total,
            preservation_total,
        })
    }

    fn answer_comparison(
        session: &mut SurveySession,
        choice: Option<Side>,
    ) -> Result<SurveyOutcome, SessionError> {
        let Some(choice) = choice else {
            warn!(index = session.question_index(), "comparison submitted without a selection");
            return Err(SessionError::InvalidInput);
        };
        let question = session
            .current_comparison()
            .ok_or(SessionError::UnexpectedAction {
                phase: Phase::Comparison,
                action: "submit comparison",
            })?;
        let response = ComparisonResponse::new(question.item_id(), choice, question.correct_side());
        debug!(
            item = %response.item_id,
            response = %response.response,
            correct = %response.correct_answer,
            "comparison answer recorded"
        );
        session.record_comparison(response);

        if session.is_awaiting_continue() {
            let fool_rate = session.fool_rate().ok();
            if let Some(rate) = fool_rate {
                info!(fool_rate = %rate, "comparison phase finished");
            }
            return Ok(SurveyOutcome::PhaseFinished {
                phase: Phase::Comparison,
                fool_rate,
            });
        }
        Ok(SurveyOutcome::Answered {
            phase: Phase::Comparison,
            remaining: session.progress().remaining,
        })
    }

    fn answer_preservation(
        session: &mut SurveySession,
        judgment: Option<PreservationJudgment>,
        problems: String,
    ) -> Result<SurveyOutcome, SessionError> {
        let Some(judgment) = judgment else {
            warn!(index = session.question_index(), "preservation submitted without a judgment");
            return Err(SessionError::InvalidInput);
        };
        let question = session
            .current_preservation()
            .ok_or(SessionError::UnexpectedAction {
                phase: Phase::Preservation,
                action: "submit preservation",
            })?;
        let response = PreservationResponse::new(question.item_id(), judgment, problems);
        debug!(item = %response.item_id, judgment = %response.judgment, "preservation answer recorded");
        session.record_preservation(response);

        if session.is_awaiting_continue() {
            info!("preservation phase finished");
            return Ok(SurveyOutcome::PhaseFinished {
                phase: Phase::Preservation,
                fool_rate: None,
            });
        }
        Ok(SurveyOutcome::Answered {
            phase: Phase::Preservation,
            remaining: session.progress().remaining,
        })
    }
}
