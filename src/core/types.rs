use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
    Lighter,
    Bolder,
}

/// Font descriptor shared by the chart title and the scale titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Font {
    pub weight: FontWeight,
    /// Size in CSS pixels.
    pub size: u16,
}

impl Font {
    #[must_use]
    pub const fn bold(size: u16) -> Self {
        Self {
            weight: FontWeight::Bold,
            size,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.size == 0 {
            return Err(ChartError::InvalidFont { size: self.size });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Left,
    Right,
    Top,
    Bottom,
}

impl AxisPosition {
    #[must_use]
    pub fn is_vertical_edge(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Canvas line-join used where axis border segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderJoinStyle {
    Round,
    Bevel,
    Miter,
}

/// Scale implementation the renderer should use for an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    Category,
    Linear,
    Logarithmic,
    Time,
    Timeseries,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointShape {
    Circle,
    Cross,
    CrossRot,
    Dash,
    Line,
    Rect,
    RectRounded,
    RectRot,
    Star,
    Triangle,
}

/// Per-point marker policy: either a plain on/off switch or a named shape.
///
/// Serialized untagged, so `false` and `"triangle"` are both accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointStyle {
    Toggle(bool),
    Shape(PointShape),
}

impl PointStyle {
    #[must_use]
    pub const fn disabled() -> Self {
        Self::Toggle(false)
    }

    #[must_use]
    pub fn draws_markers(self) -> bool {
        !matches!(self, Self::Toggle(false))
    }
}

impl Default for PointStyle {
    fn default() -> Self {
        Self::disabled()
    }
}
