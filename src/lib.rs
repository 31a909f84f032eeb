//! ferment-chart: typed options for a dual-axis fermentation chart.
//!
//! The crate produces the option object a Chart.js-compatible renderer needs
//! to plot specific gravity and temperature against elapsed time. It does not
//! draw anything; it only describes the chart and checks that the description
//! is consistent.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{ChartConfiguration, DatasetBinding};
pub use error::{ChartError, ChartResult};
