use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("series set is empty or its first series has no values")]
    EmptySeries,

    #[error("series index {index} out of range (len={len})")]
    SeriesIndexOutOfRange { index: usize, len: usize },
}
