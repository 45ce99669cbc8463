use std::path::{Path, PathBuf};

use crate::model::{AssetLayout, AssetSlot, ItemId, Side};

//
// ─── COMPARISON ───────────────────────────────────────────────────────────────
//

/// Blinded pair of a reference image and a generated image for one item.
///
/// `correct_side` is the side holding the reference and is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonQuestion {
    item_id: ItemId,
    left: PathBuf,
    right: PathBuf,
    correct_side: Side,
}

impl ComparisonQuestion {
    /// Place the reference of `item_id` on `reference_side` and the generated
    /// image on the other side.
    #[must_use]
    pub fn new(item_id: ItemId, layout: &AssetLayout, reference_side: Side) -> Self {
        let reference = layout.reference(item_id);
        let generated = layout.generated(item_id);
        let (left, right) = match reference_side {
            Side::A => (reference, generated),
            Side::B => (generated, reference),
        };
        Self {
            item_id,
            left,
            right,
            correct_side: reference_side,
        }
    }

    #[must_use]
    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    #[must_use]
    pub fn left_image(&self) -> &Path {
        &self.left
    }

    #[must_use]
    pub fn right_image(&self) -> &Path {
        &self.right
    }

    #[must_use]
    pub fn image(&self, side: Side) -> &Path {
        match side {
            Side::A => &self.left,
            Side::B => &self.right,
        }
    }

    #[must_use]
    pub fn correct_side(&self) -> Side {
        self.correct_side
    }

    /// Which asset occupies the given side.
    #[must_use]
    pub fn slot(&self, side: Side) -> AssetSlot {
        if side == self.correct_side {
            AssetSlot::Reference
        } else {
            AssetSlot::Generated
        }
    }
}

//
// ─── PRESERVATION ─────────────────────────────────────────────────────────────
//

/// Source image next to the generated output for one item. Order is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreservationQuestion {
    item_id: ItemId,
    source: PathBuf,
    output: PathBuf,
}

impl PreservationQuestion {
    #[must_use]
    pub fn new(item_id: ItemId, layout: &AssetLayout) -> Self {
        Self {
            item_id,
            source: layout.source(item_id),
            output: layout.generated(item_id),
        }
    }

    #[must_use]
    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    #[must_use]
    pub fn source_image(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn output_image(&self) -> &Path {
        &self.output
    }
}
