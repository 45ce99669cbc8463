use serde::{Deserialize, Serialize};

use crate::model::{ItemId, PreservationJudgment, Side};

/// Rater's pick for one comparison question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResponse {
    pub response: Side,
    pub correct_answer: Side,
    pub item_id: ItemId,
}

impl ComparisonResponse {
    #[must_use]
    pub fn new(item_id: ItemId, response: Side, correct_answer: Side) -> Self {
        Self {
            response,
            correct_answer,
            item_id,
        }
    }

    /// True when the rater picked the generated image.
    #[must_use]
    pub fn is_fooled(&self) -> bool {
        self.response != self.correct_answer
    }
}

/// Rater's judgment for one preservation question. `problems` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreservationResponse {
    pub judgment: PreservationJudgment,
    pub problems: String,
    pub item_id: ItemId,
}

impl PreservationResponse {
    #[must_use]
    pub fn new(item_id: ItemId, judgment: PreservationJudgment, problems: impl Into<String>) -> Self {
        Self {
            judgment,
            problems: problems.into(),
            item_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_pick_counts_as_fooled() {
        let response = ComparisonResponse::new(ItemId::new(5), Side::A, Side::B);
        assert!(response.is_fooled());
        let response = ComparisonResponse::new(ItemId::new(5), Side::B, Side::B);
        assert!(!response.is_fooled());
    }
}
