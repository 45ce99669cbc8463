use rand::Rng;
use rand::seq::SliceRandom;

use survey_core::ItemSelection;
use survey_core::model::{
    AssetLayout, ComparisonQuestion, ItemId, ItemPool, Phase, PreservationQuestion, Side,
};

use crate::error::SessionError;

/// Question sets for one session, built once at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSets {
    pub comparison: Vec<ComparisonQuestion>,
    pub preservation: Vec<PreservationQuestion>,
    /// Items left unused after sampling. `None` under a fixed selection.
    pub remaining_pool: Option<ItemPool>,
}

/// Builds blinded comparison sets and fixed-order preservation sets.
pub struct QuestionSetBuilder<'a> {
    assets: &'a AssetLayout,
}

impl<'a> QuestionSetBuilder<'a> {
    #[must_use]
    pub fn new(assets: &'a AssetLayout) -> Self {
        Self { assets }
    }

    /// One comparison question per item, each with an independent fair draw
    /// for the reference side.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Pool` if an item appears more than once.
    pub fn build_comparison_set<R: Rng + ?Sized>(
        &self,
        items: &[ItemId],
        rng: &mut R,
    ) -> Result<Vec<ComparisonQuestion>, SessionError> {
        let items = ItemPool::new(items.iter().copied())?;
        Ok(items
            .into_iter()
            .map(|item| {
                let reference_side = if rng.random_bool(0.5) { Side::A } else { Side::B };
                ComparisonQuestion::new(item, self.assets, reference_side)
            })
            .collect())
    }

    /// One preservation question per item, source always left.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Pool` if an item appears more than once.
    pub fn build_preservation_set(
        &self,
        items: &[ItemId],
    ) -> Result<Vec<PreservationQuestion>, SessionError> {
        let items = ItemPool::new(items.iter().copied())?;
        Ok(items
            .into_iter()
            .map(|item| PreservationQuestion::new(item, self.assets))
            .collect())
    }

    /// Build both sets according to the selection policy.
    ///
    /// Under sampling, comparison items are drawn first and preservation items
    /// come from what remains, so the phases never share an item.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InsufficientPool` when a draw asks for more items
    /// than remain in the pool.
    pub fn build_sets<R: Rng + ?Sized>(
        &self,
        selection: &ItemSelection,
        rng: &mut R,
    ) -> Result<QuestionSets, SessionError> {
        match selection {
            ItemSelection::Fixed {
                comparison,
                preservation,
            } => Ok(QuestionSets {
                comparison: self.build_comparison_set(comparison.items(), rng)?,
                preservation: self.build_preservation_set(preservation.items())?,
                remaining_pool: None,
            }),
            ItemSelection::Sampled {
                pool,
                comparison_count,
                preservation_count,
            } => {
                let (comparison_items, pool) =
                    sample_items(pool, *comparison_count, Phase::Comparison, rng)?;
                let (preservation_items, pool) =
                    sample_items(&pool, *preservation_count, Phase::Preservation, rng)?;
                Ok(QuestionSets {
                    comparison: self.build_comparison_set(&comparison_items, rng)?,
                    preservation: self.build_preservation_set(&preservation_items)?,
                    remaining_pool: Some(pool),
                })
            }
        }
    }
}

/// Draw `count` items uniformly without replacement, returning the draw and
/// the pool that remains.
fn sample_items<R: Rng + ?Sized>(
    pool: &ItemPool,
    count: usize,
    phase: Phase,
    rng: &mut R,
) -> Result<(Vec<ItemId>, ItemPool), SessionError> {
    if count > pool.len() {
        return Err(SessionError::InsufficientPool {
            phase,
            requested: count,
            available: pool.len(),
        });
    }
    let mut candidates = pool.items().to_vec();
    candidates.as_mut_slice().shuffle(rng);
    candidates.truncate(count);
    let remaining = pool.without(&candidates);
    Ok((candidates, remaining))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn ids(values: impl IntoIterator<Item = u32>) -> Vec<ItemId> {
        values.into_iter().map(ItemId::new).collect()
    }

    #[test]
    fn comparison_questions_hold_exactly_one_reference() {
        let layout = AssetLayout::new("images");
        let builder = QuestionSetBuilder::new(&layout);
        let mut rng = StdRng::seed_from_u64(7);

        let set = builder.build_comparison_set(&ids(1..=50), &mut rng).unwrap();

        assert_eq!(set.len(), 50);
        for question in &set {
            let reference = layout.reference(question.item_id());
            let left_is_ref = question.left_image() == reference;
            let right_is_ref = question.right_image() == reference;
            assert!(left_is_ref ^ right_is_ref);
            let expected = if left_is_ref { Side::A } else { Side::B };
            assert_eq!(question.correct_side(), expected);
        }
    }

    #[test]
    fn side_assignment_is_unbiased() {
        let layout = AssetLayout::default();
        let builder = QuestionSetBuilder::new(&layout);
        let mut rng = StdRng::seed_from_u64(2024);

        let set = builder
            .build_comparison_set(&ids(1..=4000), &mut rng)
            .unwrap();
        let on_a = set.iter().filter(|q| q.correct_side() == Side::A).count();
        #[allow(clippy::cast_precision_loss)]
        let fraction = on_a as f64 / set.len() as f64;
        assert!((fraction - 0.5).abs() < 0.05, "fraction on A was {fraction}");
    }

    #[test]
    fn duplicate_items_are_rejected() {
        let layout = AssetLayout::default();
        let builder = QuestionSetBuilder::new(&layout);
        let mut rng = StdRng::seed_from_u64(1);

        let err = builder
            .build_comparison_set(&ids([3, 4, 3]), &mut rng)
            .unwrap_err();
        assert!(matches!(err, SessionError::Pool(_)));
    }

    #[test]
    fn fixed_selection_keeps_declared_order() {
        let layout = AssetLayout::default();
        let builder = QuestionSetBuilder::new(&layout);
        let mut rng = StdRng::seed_from_u64(3);

        let sets = builder
            .build_sets(&ItemSelection::fixed_default(), &mut rng)
            .unwrap();

        let comparison: Vec<_> = sets.comparison.iter().map(ComparisonQuestion::item_id).collect();
        let preservation: Vec<_> = sets
            .preservation
            .iter()
            .map(PreservationQuestion::item_id)
            .collect();
        assert_eq!(comparison, ids(1..=20));
        assert_eq!(preservation, ids(21..=30));
        assert!(sets.remaining_pool.is_none());
    }

    #[test]
    fn sampled_selection_never_overlaps_phases() {
        let layout = AssetLayout::default();
        let builder = QuestionSetBuilder::new(&layout);
        let mut rng = StdRng::seed_from_u64(11);

        let sets = builder
            .build_sets(&ItemSelection::sampled_default(), &mut rng)
            .unwrap();

        let comparison: HashSet<_> = sets.comparison.iter().map(ComparisonQuestion::item_id).collect();
        let preservation: HashSet<_> = sets
            .preservation
            .iter()
            .map(PreservationQuestion::item_id)
            .collect();
        assert_eq!(comparison.len(), 20);
        assert_eq!(preservation.len(), 10);
        assert!(comparison.is_disjoint(&preservation));

        let remaining = sets.remaining_pool.unwrap();
        assert_eq!(remaining.len(), 132 - 30);
        assert!(remaining.items().iter().all(|item| !comparison.contains(item)
            && !preservation.contains(item)));
    }

    #[test]
    fn sampling_more_than_pool_fails() {
        let layout = AssetLayout::default();
        let builder = QuestionSetBuilder::new(&layout);
        let mut rng = StdRng::seed_from_u64(5);
        let selection = ItemSelection::Sampled {
            pool: ItemPool::range(1..=25),
            comparison_count: 20,
            preservation_count: 10,
        };

        let err = builder.build_sets(&selection, &mut rng).unwrap_err();
        assert_eq!(
            err,
            SessionError::InsufficientPool {
                phase: Phase::Preservation,
                requested: 10,
                available: 5,
            }
        );
    }
}
