use thiserror::Error;

#[derive(Error, Debug)]
pub enum LapseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Empty input array")]
    EmptyInput,

    #[error("Empty frame sequence")]
    EmptySequence,

    #[error("Resource limit exceeded: {0}")]
    ResourceExhausted(String),

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

pub type Result<T> = std::result::Result<T, LapseError>;
