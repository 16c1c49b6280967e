//! File formats understood by the reader and the writer.
//!
//! Format selection is an explicit enum per direction. Anything that does not
//! resolve to a variant is reported as [`FormatError`] instead of falling
//! through to a default.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to resolve a file format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No path, extension or format name was supplied.
    #[error("missing file format")]
    Missing,

    /// The extension or format name is not one we handle.
    #[error("unsupported file format: {name}")]
    Unsupported { name: String },
}

/// Format of an input file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Comma-delimited text (`.csv`).
    Csv,
    /// Excel workbook (`.xlsx`).
    Xlsx,
}

impl SourceFormat {
    /// Resolve the format of `path` from its extension (case-insensitive).
    ///
    /// An empty path is [`FormatError::Missing`]; any extension other than
    /// `csv` or `xlsx` is [`FormatError::Unsupported`].
    pub fn from_path(path: &Path) -> Result<Self, FormatError> {
        if path.as_os_str().is_empty() {
            return Err(FormatError::Missing);
        }
        match lowercase_extension(path).as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("xlsx") => Ok(Self::Xlsx),
            _ => Err(FormatError::Unsupported {
                name: path.display().to_string(),
            }),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Format of an output file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-delimited text with a header row.
    #[default]
    Csv,
    /// Excel workbook with a single worksheet.
    Xlsx,
    /// Apache Parquet.
    Parquet,
    /// JSON array of row objects.
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [Self::Csv, Self::Xlsx, Self::Parquet, Self::Json];

    /// File name extension written for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Parquet => "parquet",
            Self::Json => "json",
        }
    }

    /// Infer the format from the extension of a destination path.
    pub fn from_path(path: &Path) -> Result<Self, FormatError> {
        match lowercase_extension(path) {
            Some(ext) => ext.parse(),
            None => Err(FormatError::Missing),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let name = value.trim().to_ascii_lowercase();
        match name.as_str() {
            "" => Err(FormatError::Missing),
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            "parquet" => Ok(Self::Parquet),
            "json" => Ok(Self::Json),
            _ => Err(FormatError::Unsupported {
                name: value.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(str::to_ascii_lowercase)
}
