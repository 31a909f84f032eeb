use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ScaleType;

use super::{ChartConfiguration, DecimationAlgorithm};

/// What the renderer will see when it considers decimating a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimationInputProfile {
    /// Line or scatter dataset; other chart types never decimate.
    pub line_like_chart: bool,
    /// `indexAxis` resolves to `x`.
    pub index_axis_is_x: bool,
    /// Data is handed over pre-parsed (`parsing: false`), sorted by x with
    /// numeric x values.
    pub parsing_disabled: bool,
    pub visible_point_count: usize,
    pub chart_width_px: u32,
}

impl DecimationInputProfile {
    /// A line dataset with pre-parsed `{x, y}` points.
    #[must_use]
    pub fn line_series(visible_point_count: usize, chart_width_px: u32) -> Self {
        Self {
            line_like_chart: true,
            index_axis_is_x: true,
            parsing_disabled: true,
            visible_point_count,
            chart_width_px,
        }
    }

    #[must_use]
    pub fn with_parsing_disabled(mut self, parsing_disabled: bool) -> Self {
        self.parsing_disabled = parsing_disabled;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecimationSkipReason {
    Disabled,
    IndexAxisNotX,
    NotLineChart,
    /// The x scale is not `linear` or `time`; an unset type resolves to
    /// `category` for line charts.
    XScaleNotNumeric { scale_type: Option<ScaleType> },
    ParsingEnabled,
    BelowThreshold { point_count: u64, threshold: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecimationOutcome {
    Applied {
        algorithm: DecimationAlgorithm,
        /// LTTB bucket target; `None` for min-max.
        target_samples: Option<u64>,
    },
    Skipped(DecimationSkipReason),
}

impl DecimationOutcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

impl ChartConfiguration {
    /// Predicts whether the renderer's decimation plugin will act on a dataset
    /// described by `profile`, mirroring its precondition order.
    ///
    /// A prediction is not a guarantee. Callers that need a bounded point count
    /// must pre-aggregate instead of relying on `Applied`.
    #[must_use]
    pub fn decimation_outcome(&self, profile: &DecimationInputProfile) -> DecimationOutcome {
        let outcome = self.resolve_decimation(profile);
        if let DecimationOutcome::Skipped(reason) = outcome {
            debug!(?reason, points = profile.visible_point_count, "decimation will be skipped");
        }
        outcome
    }

    fn resolve_decimation(&self, profile: &DecimationInputProfile) -> DecimationOutcome {
        let options = self.plugins.decimation;
        if !options.enabled {
            return DecimationOutcome::Skipped(DecimationSkipReason::Disabled);
        }
        if !profile.index_axis_is_x {
            return DecimationOutcome::Skipped(DecimationSkipReason::IndexAxisNotX);
        }
        if !profile.line_like_chart {
            return DecimationOutcome::Skipped(DecimationSkipReason::NotLineChart);
        }

        let scale_type = self.scales.x.scale_type;
        if !matches!(scale_type, Some(ScaleType::Linear | ScaleType::Time)) {
            return DecimationOutcome::Skipped(DecimationSkipReason::XScaleNotNumeric {
                scale_type,
            });
        }
        if !profile.parsing_disabled {
            return DecimationOutcome::Skipped(DecimationSkipReason::ParsingEnabled);
        }

        let width = u64::from(profile.chart_width_px);
        let threshold = options.threshold.map_or(4 * width, u64::from);
        let point_count = profile.visible_point_count as u64;
        if point_count <= threshold {
            return DecimationOutcome::Skipped(DecimationSkipReason::BelowThreshold {
                point_count,
                threshold,
            });
        }

        let target_samples = match options.algorithm {
            DecimationAlgorithm::Lttb => Some(options.samples.map_or(width, u64::from)),
            DecimationAlgorithm::MinMax => None,
        };
        DecimationOutcome::Applied {
            algorithm: options.algorithm,
            target_samples,
        }
    }
}
