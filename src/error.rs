use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("End of stream")]
    EndOfStream,

    #[error("Format error: {0}")]
    FormatError(String),

    #[error("Unsupported mode: {0}")]
    UnsupportedMode(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
}

pub type Result<T> = std::result::Result<T, Error>;
