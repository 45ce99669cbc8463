mod controller;
mod plan;
mod progress;
mod state;
mod view;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use controller::{SurveyAction, SurveyController, SurveyOutcome};
pub use plan::{QuestionSetBuilder, QuestionSets};
pub use progress::SurveyProgress;
pub use state::SurveySession;
pub use view::{
    COMPARISON_QUESTION_TEXT, ComparisonPrompt, ImagePanel, PRESERVATION_PROBLEMS_TEXT,
    PRESERVATION_QUESTION_TEXT, PreservationPrompt, SurveyScreen,
};
