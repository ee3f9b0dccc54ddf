use thiserror::Error;

use crate::core::ChartId;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid orientation `{0}`: expected `vertical` or `horizontal`")]
    InvalidOrientation(String),

    #[error("invalid band scale padding {0}")]
    InvalidPadding(f64),

    #[error("unknown chart id: {0}")]
    UnknownChartId(ChartId),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("container dimensions are not available yet")]
    ViewportUnavailable,

    #[error("invalid data: {0}")]
    InvalidData(String),
}
