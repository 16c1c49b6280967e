//! Error types for the transform stage.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// A column required by a projection or normalization step is absent.
    #[error("column '{column}' not found in source table")]
    ColumnNotFound { column: String },

    /// A date cell matched none of the accepted formats. Fails the whole run.
    #[error("invalid date '{value}' in column '{column}' at row {row}")]
    InvalidDate {
        column: String,
        row: usize,
        value: String,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_display() {
        let err = TransformError::InvalidDate {
            column: "Order_Date".to_string(),
            row: 3,
            value: "yesterday".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date 'yesterday' in column 'Order_Date' at row 3"
        );
    }
}
