//! Error types for output generation.

use std::path::PathBuf;

use ecom_model::{FormatError, OutputFormat};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// Format name missing or not recognized, or not inferable from the path.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// No destination path was given.
    #[error("missing target path")]
    MissingTarget,

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Polars failed to serialize the frame.
    #[error("failed to write {format} to {path}: {message}")]
    Serialize {
        path: PathBuf,
        format: OutputFormat,
        message: String,
    },

    #[error("failed to write workbook {path}: {message}")]
    Xlsx { path: PathBuf, message: String },

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for OutputError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, OutputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_errors_keep_their_message() {
        let err: OutputError = FormatError::Unsupported {
            name: "feather".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "unsupported file format: feather");
    }

    #[test]
    fn serialize_error_names_format() {
        let err = OutputError::Serialize {
            path: PathBuf::from("out/customer.parquet"),
            format: OutputFormat::Parquet,
            message: "boom".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write parquet to out/customer.parquet: boom"
        );
    }
}
