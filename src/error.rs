//! Error handling for bulk validation infrastructure.
//!
//! Validation failures are data ([`crate::app::models::RowError`]) and never
//! pass through this type. `Error` covers faults around the pipeline, from
//! unreadable input and broken reference data to a panicking worker.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON could not be decoded or encoded
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// CSV batch file could not be read
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Reference dataset missing or malformed
    #[error("Reference data error in '{}': {message}", .path.display())]
    ReferenceData { path: PathBuf, message: String },

    /// The batch request itself is unusable
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A defect inside the pipeline, e.g. a worker task that panicked
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a reference data error for a specific file
    pub fn reference_data(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ReferenceData {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP-style status code used in the response envelope
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest { .. } | Self::Json { .. } | Self::CsvParsing { .. } => 400,
            _ => 500,
        }
    }

    /// Short error name used in the response envelope
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidRequest { .. } | Self::Json { .. } | Self::CsvParsing { .. } => {
                "BadRequest"
            }
            _ => "InternalServerError",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
