use std::path::PathBuf;

use survey_core::model::{AssetSlot, ItemId, Phase, Side};
use survey_core::{FoolRate, ItemSelection};

use super::state::SurveySession;

pub const COMPARISON_QUESTION_TEXT: &str =
    "Which image do you think is the real OCT image (i.e., NOT generated by a model)?";
pub const PRESERVATION_QUESTION_TEXT: &str = "Are all the anatomical structures present in the ART10 image preserved in its enhanced version generated by a model?";
pub const PRESERVATION_PROBLEMS_TEXT: &str = "Explain the main problems that you see in the generated image (e.g., introduction of new artifacts, bad reconstruction of specific anatomical structures, etc.)";

/// One image to render with its caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePanel {
    pub path: PathBuf,
    pub caption: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonPrompt {
    /// 1-based position within the phase.
    pub number: usize,
    pub total: usize,
    pub item_id: ItemId,
    pub left: ImagePanel,
    pub right: ImagePanel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreservationPrompt {
    /// 1-based position within the phase.
    pub number: usize,
    pub total: usize,
    pub item_id: ItemId,
    pub left: ImagePanel,
    pub right: ImagePanel,
}

fn progress_fraction(number: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let fraction = number as f32 / total as f32;
    fraction.clamp(0.0, 1.0)
}

impl ComparisonPrompt {
    #[must_use]
    pub fn progress(&self) -> f32 {
        progress_fraction(self.number, self.total)
    }
}

impl PreservationPrompt {
    #[must_use]
    pub fn progress(&self) -> f32 {
        progress_fraction(self.number, self.total)
    }
}

/// What the display collaborator should show for the current session state.
#[derive(Debug, Clone, PartialEq)]
pub enum SurveyScreen {
    Intro {
        comparison_total: usize,
        preservation_total: usize,
    },
    Comparison(ComparisonPrompt),
    ComparisonComplete {
        fool_rate: Option<FoolRate>,
    },
    Preservation(PreservationPrompt),
    PreservationComplete,
    Results {
        answered: usize,
    },
}

impl SurveyScreen {
    /// Derive the screen from session state. Intro totals come from the
    /// selection since question sets are not built yet.
    #[must_use]
    pub fn for_session(session: &SurveySession, selection: &ItemSelection) -> Self {
        match session.phase() {
            Phase::Intro => SurveyScreen::Intro {
                comparison_total: selection.comparison_len(),
                preservation_total: selection.preservation_len(),
            },
            Phase::Comparison => match session.current_comparison() {
                Some(question) => SurveyScreen::Comparison(ComparisonPrompt {
                    number: session.question_index() + 1,
                    total: session.phase_len(),
                    item_id: question.item_id(),
                    left: ImagePanel {
                        path: question.left_image().to_path_buf(),
                        caption: Side::A.caption(),
                    },
                    right: ImagePanel {
                        path: question.right_image().to_path_buf(),
                        caption: Side::B.caption(),
                    },
                }),
                None => SurveyScreen::ComparisonComplete {
                    fool_rate: session.fool_rate().ok(),
                },
            },
            Phase::Preservation => match session.current_preservation() {
                Some(question) => SurveyScreen::Preservation(PreservationPrompt {
                    number: session.question_index() + 1,
                    total: session.phase_len(),
                    item_id: question.item_id(),
                    left: ImagePanel {
                        path: question.source_image().to_path_buf(),
                        caption: AssetSlot::Source.preservation_caption(),
                    },
                    right: ImagePanel {
                        path: question.output_image().to_path_buf(),
                        caption: AssetSlot::Generated.preservation_caption(),
                    },
                }),
                None => SurveyScreen::PreservationComplete,
            },
            Phase::Results => SurveyScreen::Results {
                answered: session.comparison_responses().len()
                    + session.preservation_responses().len(),
            },
        }
    }
}
