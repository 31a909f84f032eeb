//! Leaf value types shared by every part of the chart configuration.

pub mod axis_id;
pub mod color;
pub mod types;

pub use axis_id::AxisId;
pub use color::HexColor;
pub use types::{
    AxisPosition, BorderJoinStyle, Font, FontWeight, PointShape, PointStyle, ScaleType,
};
