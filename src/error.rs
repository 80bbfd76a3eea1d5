//! Error handling for the resume scanner application
//!
//! The scorer itself is total over its inputs; these errors belong to the
//! input pipeline, configuration and report output around it.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeScannerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeScannerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeScannerError {
    fn from(err: anyhow::Error) -> Self {
        ResumeScannerError::InvalidInput(err.to_string())
    }
}

impl From<askama::Error> for ResumeScannerError {
    fn from(err: askama::Error) -> Self {
        ResumeScannerError::OutputFormatting(err.to_string())
    }
}
