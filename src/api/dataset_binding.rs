use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::AxisId;
use crate::error::{ChartError, ChartResult};

use super::ChartConfiguration;

/// The axis tag a dataset carries when handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetBinding {
    pub label: String,
    #[serde(rename = "yAxisID")]
    pub y_axis_id: AxisId,
}

impl DatasetBinding {
    #[must_use]
    pub fn new(label: impl Into<String>, y_axis_id: AxisId) -> Self {
        Self {
            label: label.into(),
            y_axis_id,
        }
    }
}

impl ChartConfiguration {
    /// Checks that every y-scale is bound by exactly one dataset and that no
    /// dataset targets an axis this configuration does not define.
    pub fn check_dataset_bindings(&self, datasets: &[DatasetBinding]) -> ChartResult<()> {
        if let Some(stray) = datasets
            .iter()
            .find(|dataset| self.scales.y_axis_by_id(&dataset.y_axis_id).is_none())
        {
            debug!(
                label = %stray.label,
                axis_id = %stray.y_axis_id,
                "dataset targets unknown axis"
            );
            return Err(ChartError::UnknownAxisBinding {
                label: stray.label.clone(),
                axis_id: stray.y_axis_id.to_string(),
            });
        }

        for (_, axis) in self.scales.y_axes() {
            let count = datasets
                .iter()
                .filter(|dataset| dataset.y_axis_id == axis.y_axis_id)
                .count();
            match count {
                1 => {}
                0 => {
                    return Err(ChartError::UnboundAxis {
                        axis_id: axis.y_axis_id.to_string(),
                    });
                }
                count => {
                    return Err(ChartError::AmbiguousAxisBinding {
                        axis_id: axis.y_axis_id.to_string(),
                        count,
                    });
                }
            }
        }
        Ok(())
    }
}
