use serde::{Deserialize, Serialize};

/// How the renderer picks the elements a hover or tooltip targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// Every series at the nearest shared x-index.
    Index,
    /// Every element of the dataset under the pointer.
    Dataset,
    /// The closest element(s), regardless of series.
    Nearest,
    /// Only elements intersecting the pointer.
    Point,
    /// Elements sharing the pointer's x-coordinate.
    X,
    /// Elements sharing the pointer's y-coordinate.
    Y,
}

/// Hover/tooltip targeting policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InteractionOptions {
    pub mode: InteractionMode,
    /// When `true` the pointer must sit exactly on an element to trigger.
    pub intersect: bool,
}

impl InteractionOptions {
    /// Column targeting: the pointer only needs to be nearest an x-index, and
    /// the tooltip lists every series at that index.
    #[must_use]
    pub const fn index_column() -> Self {
        Self {
            mode: InteractionMode::Index,
            intersect: false,
        }
    }

    /// `true` when one tooltip reports every series for the same timestamp.
    #[must_use]
    pub fn pairs_series_by_timestamp(self) -> bool {
        self.mode == InteractionMode::Index && !self.intersect
    }
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self::index_column()
    }
}
