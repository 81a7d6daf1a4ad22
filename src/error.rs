use thiserror::Error;

use crate::tokenizer::ScanError;

#[derive(Error, Debug)]
pub enum GcodeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line_number}: {source}")]
    Scan {
        line_number: usize,
        #[source]
        source: ScanError,
    },

    #[error("line {line_number}: longer than {limit} bytes")]
    LineTooLong { line_number: usize, limit: usize },

    #[error("line {line_number}: invalid UTF-8")]
    Encoding { line_number: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type GcodeResult<T> = Result<T, GcodeError>;

impl GcodeError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        GcodeError::Config(message.into())
    }

    /// Whether the line supply can keep producing lines after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GcodeError::Scan { .. })
    }
}
