use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShtError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Truncation degree {llim} exceeds configured maximum {lmax}")]
    Truncation { llim: usize, lmax: usize },

    #[error("Bad {what} shape: expected {expected}, got {got}")]
    Shape {
        what: &'static str,
        expected: String,
        got: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ShtResult<T> = Result<T, ShtError>;
