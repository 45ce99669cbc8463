use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of a survey session. Strictly linear: intro, comparison, preservation, results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Intro,
    Comparison,
    Preservation,
    Results,
}

impl Phase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Intro => "intro",
            Phase::Comparison => "comparison",
            Phase::Preservation => "preservation",
            Phase::Results => "results",
        }
    }

    /// The phase that follows this one, `None` for `Results`.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Phase::Intro => Some(Phase::Comparison),
            Phase::Comparison => Some(Phase::Preservation),
            Phase::Preservation => Some(Phase::Results),
            Phase::Results => None,
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Results)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
