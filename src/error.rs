//! Error handling for CSV preview operations.
//!
//! Every failure surfaces to the caller as a `PreviewError` carrying a
//! human-readable message. A failed upload never produces a partial dataset.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreviewError {
    /// No non-blank lines were found in the decoded text
    #[error("The CSV file is empty")]
    EmptyFile { name: String },

    /// The decode step (file to text) failed before parsing started
    #[error("Failed to read file '{name}'")]
    ReadFailure {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Any other failure raised while parsing, message preserved
    #[error("Failed to parse CSV: {message}")]
    ParseFailure { message: String },

    /// Upload rejected before decoding because it is not a CSV file
    #[error("Invalid file format: Please upload a CSV file (got '{name}')")]
    UnsupportedFileType { name: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl PreviewError {
    /// Create an empty-file error for the named upload
    pub fn empty_file(name: impl Into<String>) -> Self {
        Self::EmptyFile { name: name.into() }
    }

    /// Create a read failure with the underlying I/O cause
    pub fn read_failure(name: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadFailure {
            name: name.into(),
            source,
        }
    }

    /// Wrap an unexpected parse-stage failure
    pub fn parse_failure(message: impl Into<String>) -> Self {
        Self::ParseFailure {
            message: message.into(),
        }
    }

    pub fn unsupported_file_type(name: impl Into<String>) -> Self {
        Self::UnsupportedFileType { name: name.into() }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True when the error came from the decode step rather than the parser
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::ReadFailure { .. })
    }
}

pub type Result<T> = std::result::Result<T, PreviewError>;
