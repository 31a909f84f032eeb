use serde::{Deserialize, Serialize};

use crate::core::Font;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecimationAlgorithm {
    /// Largest-triangle-three-buckets: keeps peaks and troughs while reducing
    /// the series to a target sample count.
    #[serde(rename = "lttb")]
    Lttb,
    /// Keeps the first, last, min and max point of every pixel column.
    #[serde(rename = "min-max")]
    MinMax,
}

/// Down-sampling request forwarded to the renderer's decimation plugin.
///
/// This is advisory. The renderer decides whether the preconditions hold, see
/// [`crate::api::DecimationOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecimationOptions {
    pub enabled: bool,
    pub algorithm: DecimationAlgorithm,
    /// Target sample count for [`DecimationAlgorithm::Lttb`]. Defaults to the
    /// chart width in pixels when unset; ignored by min-max.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub samples: Option<u32>,
    /// Minimum visible point count before decimation kicks in. Defaults to
    /// four times the chart width when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u32>,
}

impl DecimationOptions {
    #[must_use]
    pub const fn lttb() -> Self {
        Self {
            enabled: true,
            algorithm: DecimationAlgorithm::Lttb,
            samples: None,
            threshold: None,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.samples == Some(0) {
            return Err(ChartError::InvalidDecimation(
                "samples must be greater than zero".to_owned(),
            ));
        }
        if self.threshold == Some(0) {
            return Err(ChartError::InvalidDecimation(
                "threshold must be greater than zero".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Chart-level title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TitleOptions {
    pub display: bool,
    pub text: String,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginOptions {
    pub decimation: DecimationOptions,
    pub title: TitleOptions,
}

impl PluginOptions {
    pub fn validate(&self) -> ChartResult<()> {
        self.decimation.validate()?;
        self.title.font.validate()
    }
}
