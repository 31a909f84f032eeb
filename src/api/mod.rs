mod chart_config;
mod dataset_binding;
mod decimation_advisory;
mod json_contract;
mod plugins;
mod scales;

pub use chart_config::{
    CHART_TITLE_TEXT, ChartConfiguration, DENSITY_AXIS_COLOR, DENSITY_AXIS_ID,
    DENSITY_AXIS_TITLE, TEMPERATURE_AXIS_COLOR, TEMPERATURE_AXIS_ID, TEMPERATURE_AXIS_TITLE,
    TITLE_FONT_SIZE,
};
pub use dataset_binding::DatasetBinding;
pub use decimation_advisory::{DecimationInputProfile, DecimationOutcome, DecimationSkipReason};
pub use json_contract::{CHART_CONFIGURATION_JSON_SCHEMA_V1, ChartConfigurationJsonContractV1};
pub use plugins::{DecimationAlgorithm, DecimationOptions, PluginOptions, TitleOptions};
pub use scales::{
    DENSITY_SCALE_KEY, GridOptions, ScaleTitle, Scales, TEMPERATURE_SCALE_KEY, TIME_SCALE_KEY,
    XAxisOptions, YAxisOptions,
};
