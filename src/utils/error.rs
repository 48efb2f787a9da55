use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelperError {
    #[error("parse failed: {message}")]
    Parse { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("clipboard write failed: {message}")]
    Clipboard { message: String },
}

pub type Result<T> = std::result::Result<T, HelperError>;
