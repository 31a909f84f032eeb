use serde::{Deserialize, Serialize};

use crate::core::{AxisId, AxisPosition, BorderJoinStyle, Font, HexColor, ScaleType};
use crate::error::{ChartError, ChartResult};

/// Key of the density scale inside `scales`.
pub const DENSITY_SCALE_KEY: &str = "yDensity";
/// Key of the temperature scale inside `scales`.
pub const TEMPERATURE_SCALE_KEY: &str = "yTemperature";
/// Key of the shared time scale inside `scales`.
pub const TIME_SCALE_KEY: &str = "x";

/// Grid-line options. Unset leaves are left to the renderer's defaults and
/// are not serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GridOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw_on_chart_area: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw_ticks: Option<bool>,
    /// When `true`, grid lines are shifted between labels instead of
    /// aligning with data points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<bool>,
}

impl GridOptions {
    /// `true` unless the grid is explicitly kept off the chart area.
    #[must_use]
    pub fn draws_on_chart_area(self) -> bool {
        self.draw_on_chart_area.unwrap_or(true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaleTitle {
    pub display: bool,
    pub text: String,
    pub font: Font,
    pub color: HexColor,
}

/// One value axis of the dual-axis layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct YAxisOptions {
    pub title: ScaleTitle,
    pub display: bool,
    pub position: AxisPosition,
    #[serde(rename = "yAxisID")]
    pub y_axis_id: AxisId,
    pub border_join_style: BorderJoinStyle,
    pub grid: GridOptions,
}

/// The shared time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct XAxisOptions {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub scale_type: Option<ScaleType>,
    pub grid: GridOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Scales {
    pub y_density: YAxisOptions,
    pub y_temperature: YAxisOptions,
    pub x: XAxisOptions,
}

impl Scales {
    /// Both y-scales in declaration order, keyed the way they serialize.
    #[must_use]
    pub fn y_axes(&self) -> [(&'static str, &YAxisOptions); 2] {
        [
            (DENSITY_SCALE_KEY, &self.y_density),
            (TEMPERATURE_SCALE_KEY, &self.y_temperature),
        ]
    }

    /// Finds the y-scale a dataset tagged with `axis_id` is drawn against.
    #[must_use]
    pub fn y_axis_by_id(&self, axis_id: &AxisId) -> Option<&YAxisOptions> {
        self.y_axes()
            .into_iter()
            .map(|(_, axis)| axis)
            .find(|axis| &axis.y_axis_id == axis_id)
    }

    /// Number of y-scales drawing grid lines across the plot area.
    #[must_use]
    pub fn chart_area_grid_count(&self) -> usize {
        self.y_axes()
            .into_iter()
            .filter(|(_, axis)| axis.grid.draws_on_chart_area())
            .count()
    }

    /// `true` when both y-scale titles encode the same color, so the two
    /// series can no longer be told apart by their axis.
    #[must_use]
    pub fn y_titles_share_color(&self) -> bool {
        self.y_density
            .title
            .color
            .same_color(&self.y_temperature.title.color)
    }

    /// Structural checks: distinct axis ids, one y-scale per side, sane fonts.
    pub fn validate(&self) -> ChartResult<()> {
        if self.y_density.y_axis_id == self.y_temperature.y_axis_id {
            return Err(ChartError::DuplicateAxisId {
                axis_id: self.y_density.y_axis_id.to_string(),
            });
        }

        for (key, axis) in self.y_axes() {
            if !axis.position.is_vertical_edge() {
                return Err(ChartError::AxisPlacement(format!(
                    "{key} must sit on the left or right edge, got {:?}",
                    axis.position
                )));
            }
            axis.title.font.validate()?;
        }

        if self.y_density.position == self.y_temperature.position {
            return Err(ChartError::AxisPlacement(format!(
                "{DENSITY_SCALE_KEY} and {TEMPERATURE_SCALE_KEY} both sit on the {:?} edge",
                self.y_density.position
            )));
        }

        Ok(())
    }
}
