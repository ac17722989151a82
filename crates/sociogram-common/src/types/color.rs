//! Color labels shared by component labeling and graph coloring.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of distinct colors the display palette provides.
///
/// Component labels wrap into this palette. Welsh-Powell labels are
/// unbounded; renderers map anything past the palette to a neutral color.
pub const PALETTE_SIZE: u32 = 5;

/// A 1-based color label. [`ColorIndex::UNCOLORED`] (zero) means no label
/// has been assigned.
///
/// Component labeling and graph coloring share this label domain, but each
/// analysis returns its own assignment map, so labels from different runs
/// never mix.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct ColorIndex(u32);

impl ColorIndex {
    /// The absent label.
    pub const UNCOLORED: Self = Self(0);

    /// Creates a label from its raw value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw label value; zero means uncolored.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns true if a label has been assigned.
    #[must_use]
    pub const fn is_colored(self) -> bool {
        self.0 != 0
    }

    /// Palette-wrapped label for the component at `index` (zero-based):
    /// `(index mod PALETTE_SIZE) + 1`.
    #[must_use]
    pub fn from_component(index: usize) -> Self {
        Self((index % PALETTE_SIZE as usize) as u32 + 1)
    }
}

impl fmt::Display for ColorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
