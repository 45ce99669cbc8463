use std::path::{Path, PathBuf};

use crate::model::ItemId;

/// Default root directory of the image store.
pub const DEFAULT_ASSET_ROOT: &str = "images";

/// Which of an item's three assets an image path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetSlot {
    /// Low-quality source image (ART10).
    Source,
    /// High-quality ground-truth reference.
    Reference,
    /// Model-generated output.
    Generated,
}

impl AssetSlot {
    /// Caption used when this slot is shown in the preservation phase.
    ///
    /// The reference never appears there; it is captioned like the source.
    #[must_use]
    pub fn preservation_caption(self) -> &'static str {
        match self {
            AssetSlot::Generated => "Generated enhanced version",
            AssetSlot::Source | AssetSlot::Reference => "ART10",
        }
    }

    fn dir_and_prefix(self) -> (&'static str, &'static str) {
        match self {
            AssetSlot::Source => ("inputs", "oct_low_quality"),
            AssetSlot::Reference => ("targets", "oct_high_quality"),
            AssetSlot::Generated => ("outputs", "oct_output_diffusion"),
        }
    }
}

/// Resolves asset file paths for items under a root directory.
///
/// Layout:
/// - `targets/oct_high_quality_{id}.jpeg`
/// - `inputs/oct_low_quality_{id}.jpeg`
/// - `outputs/oct_output_diffusion_{id}.jpeg`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    root: PathBuf,
}

impl AssetLayout {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn path(&self, item: ItemId, slot: AssetSlot) -> PathBuf {
        let (dir, prefix) = slot.dir_and_prefix();
        self.root.join(dir).join(format!("{prefix}_{item}.jpeg"))
    }

    #[must_use]
    pub fn source(&self, item: ItemId) -> PathBuf {
        self.path(item, AssetSlot::Source)
    }

    #[must_use]
    pub fn reference(&self, item: ItemId) -> PathBuf {
        self.path(item, AssetSlot::Reference)
    }

    #[must_use]
    pub fn generated(&self, item: ItemId) -> PathBuf {
        self.path(item, AssetSlot::Generated)
    }
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_ROOT)
    }
}
