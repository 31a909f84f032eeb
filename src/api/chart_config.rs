use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{AxisId, AxisPosition, BorderJoinStyle, Font, HexColor, PointStyle, ScaleType};
use crate::error::ChartResult;
use crate::interaction::InteractionOptions;

use super::{
    DecimationAlgorithm, DecimationOptions, GridOptions, PluginOptions, ScaleTitle, Scales,
    TitleOptions, XAxisOptions, YAxisOptions,
};

pub const CHART_TITLE_TEXT: &str = "Fermenting";
pub const TITLE_FONT_SIZE: u16 = 16;

pub const DENSITY_AXIS_ID: &str = "y-densities";
pub const DENSITY_AXIS_TITLE: &str = "Density (SG 20/20)";
pub const DENSITY_AXIS_COLOR: &str = "#27013F";

pub const TEMPERATURE_AXIS_ID: &str = "y-temperatures";
pub const TEMPERATURE_AXIS_TITLE: &str = "Temperature (°C)";
pub const TEMPERATURE_AXIS_COLOR: &str = "#F27405";

/// Options for a dual-axis fermentation line chart: density on the left,
/// temperature on the right, both against one elapsed-time axis.
///
/// The value is plain data handed to a Chart.js-compatible renderer. Build it
/// with [`ChartConfiguration::fermenting`] (or `Default`) and adjust leaves
/// with the `with_*` methods, each of which consumes and returns the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChartConfiguration {
    /// Resize with the container.
    pub responsive: bool,
    pub point_style: PointStyle,
    /// Disabled so the chart fills a fixed-height container at any width.
    pub maintain_aspect_ratio: bool,
    pub interaction: InteractionOptions,
    pub plugins: PluginOptions,
    pub scales: Scales,
}

impl ChartConfiguration {
    /// The fermentation chart as shipped: index-column tooltips, LTTB
    /// decimation request, density left with the chart-area grid, temperature
    /// right without it.
    #[must_use]
    pub fn fermenting() -> Self {
        Self {
            responsive: true,
            point_style: PointStyle::disabled(),
            maintain_aspect_ratio: false,
            interaction: InteractionOptions::index_column(),
            plugins: PluginOptions {
                decimation: DecimationOptions::lttb(),
                title: TitleOptions {
                    display: true,
                    text: CHART_TITLE_TEXT.to_owned(),
                    font: Font::bold(TITLE_FONT_SIZE),
                },
            },
            scales: Scales {
                y_density: YAxisOptions {
                    title: axis_title(DENSITY_AXIS_TITLE, DENSITY_AXIS_COLOR),
                    display: true,
                    position: AxisPosition::Left,
                    y_axis_id: AxisId::from_static(DENSITY_AXIS_ID),
                    border_join_style: BorderJoinStyle::Round,
                    grid: GridOptions {
                        draw_on_chart_area: Some(true),
                        draw_ticks: Some(true),
                        offset: None,
                    },
                },
                y_temperature: YAxisOptions {
                    title: axis_title(TEMPERATURE_AXIS_TITLE, TEMPERATURE_AXIS_COLOR),
                    display: true,
                    position: AxisPosition::Right,
                    y_axis_id: AxisId::from_static(TEMPERATURE_AXIS_ID),
                    border_join_style: BorderJoinStyle::Round,
                    grid: GridOptions {
                        draw_on_chart_area: Some(false),
                        ..GridOptions::default()
                    },
                },
                x: XAxisOptions {
                    scale_type: None,
                    grid: GridOptions {
                        offset: Some(false),
                        ..GridOptions::default()
                    },
                },
            },
        }
    }

    /// Sets the chart title text.
    #[must_use]
    pub fn with_title_text(mut self, text: impl Into<String>) -> Self {
        self.plugins.title.text = text.into();
        self
    }

    /// Sets the density axis title text.
    #[must_use]
    pub fn with_density_title(mut self, text: impl Into<String>) -> Self {
        self.scales.y_density.title.text = text.into();
        self
    }

    /// Sets the temperature axis title text.
    #[must_use]
    pub fn with_temperature_title(mut self, text: impl Into<String>) -> Self {
        self.scales.y_temperature.title.text = text.into();
        self
    }

    /// Sets the density axis title color.
    #[must_use]
    pub fn with_density_color(mut self, color: HexColor) -> Self {
        self.scales.y_density.title.color = color;
        self
    }

    /// Sets the temperature axis title color.
    #[must_use]
    pub fn with_temperature_color(mut self, color: HexColor) -> Self {
        self.scales.y_temperature.title.color = color;
        self
    }

    /// Toggles the decimation request.
    #[must_use]
    pub fn with_decimation_enabled(mut self, enabled: bool) -> Self {
        self.plugins.decimation.enabled = enabled;
        self
    }

    /// Selects the decimation algorithm.
    #[must_use]
    pub fn with_decimation_algorithm(mut self, algorithm: DecimationAlgorithm) -> Self {
        self.plugins.decimation.algorithm = algorithm;
        self
    }

    /// Sets the LTTB target sample count.
    #[must_use]
    pub fn with_decimation_samples(mut self, samples: u32) -> Self {
        self.plugins.decimation.samples = Some(samples);
        self
    }

    /// Sets the visible point count above which decimation runs.
    #[must_use]
    pub fn with_decimation_threshold(mut self, threshold: u32) -> Self {
        self.plugins.decimation.threshold = Some(threshold);
        self
    }

    /// Sets the scale implementation of the shared time axis.
    #[must_use]
    pub fn with_x_scale_type(mut self, scale_type: ScaleType) -> Self {
        self.scales.x.scale_type = Some(scale_type);
        self
    }

    /// Runs the structural checks that types alone cannot express.
    pub fn validate(&self) -> ChartResult<()> {
        let result = self
            .scales
            .validate()
            .and_then(|()| self.plugins.validate());
        if let Err(err) = &result {
            debug!(error = %err, "chart configuration rejected");
            return result;
        }

        if self.scales.chart_area_grid_count() > 1 {
            warn!("both y-scales draw grid lines on the chart area");
        }
        if self.scales.y_titles_share_color() {
            warn!(
                color = %self.scales.y_density.title.color,
                "both y-scale titles use the same color"
            );
        }
        Ok(())
    }

    /// Validates and returns the value, for use at the end of a builder chain.
    pub fn validated(self) -> ChartResult<Self> {
        self.validate()?;
        Ok(self)
    }
}

impl Default for ChartConfiguration {
    fn default() -> Self {
        Self::fermenting()
    }
}

fn axis_title(text: &str, color: &'static str) -> ScaleTitle {
    ScaleTitle {
        display: true,
        text: text.to_owned(),
        font: Font::bold(TITLE_FONT_SIZE),
        color: HexColor::from_static(color),
    }
}
