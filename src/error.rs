use thiserror::Error;

pub type SliderResult<T> = Result<T, SliderError>;

#[derive(Debug, Error)]
pub enum SliderError {
    #[error("invalid slider config: {0}")]
    InvalidConfig(String),

    #[error("invalid ranges: {0}")]
    InvalidRanges(String),

    #[error("unknown slider id: {0}")]
    UnknownSlider(u32),

    #[error("invalid render frame: {0}")]
    InvalidFrame(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
