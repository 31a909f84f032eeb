use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("invalid color `{value}`: expected #RGB, #RGBA, #RRGGBB or #RRGGBBAA")]
    InvalidColor { value: String },

    #[error("invalid axis id `{value}`: must be non-empty without surrounding whitespace")]
    InvalidAxisId { value: String },

    #[error("axis id `{axis_id}` is used by more than one y-scale")]
    DuplicateAxisId { axis_id: String },

    #[error("invalid axis placement: {0}")]
    AxisPlacement(String),

    #[error("invalid font size {size}: must be greater than zero")]
    InvalidFont { size: u16 },

    #[error("invalid decimation request: {0}")]
    InvalidDecimation(String),

    #[error("no dataset is bound to axis `{axis_id}`")]
    UnboundAxis { axis_id: String },

    #[error("axis `{axis_id}` is bound by {count} datasets, expected exactly one")]
    AmbiguousAxisBinding { axis_id: String, count: usize },

    #[error("dataset `{label}` targets unknown axis `{axis_id}`")]
    UnknownAxisBinding { label: String, axis_id: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
