use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("script failed: {0}")]
    Script(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("interpreter output was not valid UTF-8")]
    Utf8,
}

pub type Result<T> = std::result::Result<T, BridgeError>;
