use std::path::PathBuf;

use thiserror::Error;

use crate::model::{AssetLayout, ItemId, ItemPool, Phase};

/// Items in the default study pool (ids 1..=132).
pub const DEFAULT_POOL_SIZE: u32 = 132;
/// Comparison questions per session.
pub const COMPARISON_QUESTIONS: usize = 20;
/// Preservation questions per session.
pub const PRESERVATION_QUESTIONS: usize = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SurveyConfigError {
    #[error("no items configured for the {0} phase")]
    EmptyPhase(Phase),

    #[error("item {0} is listed for both phases")]
    Overlap(ItemId),

    #[error("question count for the {0} phase must be at least 1")]
    ZeroCount(Phase),
}

/// How items are chosen for the two question phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSelection {
    /// Pre-declared item lists per phase. Only side placement is randomized.
    Fixed {
        comparison: ItemPool,
        preservation: ItemPool,
    },
    /// Draw items uniformly without replacement; preservation draws from what
    /// the comparison draw left over.
    Sampled {
        pool: ItemPool,
        comparison_count: usize,
        preservation_count: usize,
    },
}

impl ItemSelection {
    /// Comparison items 1..=20 and preservation items 21..=30.
    #[must_use]
    pub fn fixed_default() -> Self {
        let comparison_end = u32::try_from(COMPARISON_QUESTIONS).unwrap_or(u32::MAX);
        let preservation_end =
            comparison_end.saturating_add(u32::try_from(PRESERVATION_QUESTIONS).unwrap_or(0));
        Self::Fixed {
            comparison: ItemPool::range(1..=comparison_end),
            preservation: ItemPool::range(comparison_end + 1..=preservation_end),
        }
    }

    /// 20 comparison and 10 preservation items sampled from ids 1..=132.
    #[must_use]
    pub fn sampled_default() -> Self {
        Self::Sampled {
            pool: ItemPool::range(1..=DEFAULT_POOL_SIZE),
            comparison_count: COMPARISON_QUESTIONS,
            preservation_count: PRESERVATION_QUESTIONS,
        }
    }

    #[must_use]
    pub fn comparison_len(&self) -> usize {
        match self {
            ItemSelection::Fixed { comparison, .. } => comparison.len(),
            ItemSelection::Sampled {
                comparison_count, ..
            } => *comparison_count,
        }
    }

    #[must_use]
    pub fn preservation_len(&self) -> usize {
        match self {
            ItemSelection::Fixed { preservation, .. } => preservation.len(),
            ItemSelection::Sampled {
                preservation_count,
                ..
            } => *preservation_count,
        }
    }

    fn validate(&self) -> Result<(), SurveyConfigError> {
        match self {
            ItemSelection::Fixed {
                comparison,
                preservation,
            } => {
                if comparison.is_empty() {
                    return Err(SurveyConfigError::EmptyPhase(Phase::Comparison));
                }
                if preservation.is_empty() {
                    return Err(SurveyConfigError::EmptyPhase(Phase::Preservation));
                }
                if let Some(shared) = preservation
                    .items()
                    .iter()
                    .copied()
                    .find(|item| comparison.contains(*item))
                {
                    return Err(SurveyConfigError::Overlap(shared));
                }
                Ok(())
            }
            ItemSelection::Sampled {
                comparison_count,
                preservation_count,
                ..
            } => {
                if *comparison_count == 0 {
                    return Err(SurveyConfigError::ZeroCount(Phase::Comparison));
                }
                if *preservation_count == 0 {
                    return Err(SurveyConfigError::ZeroCount(Phase::Preservation));
                }
                Ok(())
            }
        }
    }
}

impl Default for ItemSelection {
    fn default() -> Self {
        Self::fixed_default()
    }
}

/// Validated survey configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SurveyConfig {
    assets: AssetLayout,
    selection: ItemSelection,
}

/// Unvalidated configuration as assembled from CLI/env input.
#[derive(Debug, Clone, Default)]
pub struct SurveyConfigDraft {
    pub asset_root: Option<PathBuf>,
    pub selection: Option<ItemSelection>,
}

impl SurveyConfigDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the draft, filling unset fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns `SurveyConfigError` for empty phases, overlapping fixed lists,
    /// or zero sample counts.
    pub fn validate(self) -> Result<SurveyConfig, SurveyConfigError> {
        let assets = self
            .asset_root
            .filter(|root| !root.as_os_str().is_empty())
            .map_or_else(AssetLayout::default, AssetLayout::new);
        let selection = self.selection.unwrap_or_default();
        selection.validate()?;
        Ok(SurveyConfig { assets, selection })
    }
}

impl SurveyConfig {
    #[must_use]
    pub fn assets(&self) -> &AssetLayout {
        &self.assets
    }

    #[must_use]
    pub fn selection(&self) -> &ItemSelection {
        &self.selection
    }
}
