use std::collections::HashSet;
use std::ops::RangeInclusive;

use thiserror::Error;

use crate::model::ItemId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ItemPoolError {
    #[error("item id 0 is not valid; ids start at 1")]
    ZeroId,

    #[error("item {0} appears more than once")]
    Duplicate(ItemId),
}

/// Ordered, duplicate-free list of item ids.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemPool {
    items: Vec<ItemId>,
}

impl ItemPool {
    /// Build a pool from an explicit list, preserving order.
    ///
    /// # Errors
    ///
    /// Returns `ItemPoolError::ZeroId` for id 0 and `ItemPoolError::Duplicate`
    /// when an id repeats.
    pub fn new(items: impl IntoIterator<Item = ItemId>) -> Result<Self, ItemPoolError> {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for item in items {
            if item.value() == 0 {
                return Err(ItemPoolError::ZeroId);
            }
            if !seen.insert(item) {
                return Err(ItemPoolError::Duplicate(item));
            }
            ordered.push(item);
        }
        Ok(Self { items: ordered })
    }

    /// Pool covering a contiguous id range. A range starting at 0 is clamped to 1.
    #[must_use]
    pub fn range(ids: RangeInclusive<u32>) -> Self {
        let start = (*ids.start()).max(1);
        Self {
            items: (start..=*ids.end()).map(ItemId::new).collect(),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    /// Returns true when the two pools share at least one id.
    #[must_use]
    pub fn overlaps(&self, other: &ItemPool) -> bool {
        let ours: HashSet<_> = self.items.iter().collect();
        other.items.iter().any(|item| ours.contains(item))
    }

    /// Pool without the given ids, order preserved.
    #[must_use]
    pub fn without(&self, taken: &[ItemId]) -> Self {
        let taken: HashSet<_> = taken.iter().collect();
        Self {
            items: self
                .items
                .iter()
                .copied()
                .filter(|item| !taken.contains(item))
                .collect(),
        }
    }
}

impl IntoIterator for ItemPool {
    type Item = ItemId;
    type IntoIter = std::vec::IntoIter<ItemId>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
