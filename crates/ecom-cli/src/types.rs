use std::path::PathBuf;

use chrono::NaiveDate;
use ecom_model::OutputFormat;

/// Inputs for one ETL run.
#[derive(Debug, Clone)]
pub struct EtlRequest {
    /// Source file (`.csv` or `.xlsx`).
    pub input: PathBuf,
    /// Root under which the dated output directory is created.
    pub output_root: PathBuf,
    /// Date naming the output directory.
    pub run_date: NaiveDate,
    pub format: OutputFormat,
}

impl EtlRequest {
    pub fn new(input: impl Into<PathBuf>, run_date: NaiveDate) -> Self {
        Self {
            input: input.into(),
            output_root: PathBuf::from(ecom_output::DEFAULT_OUTPUT_ROOT),
            run_date,
            format: OutputFormat::default(),
        }
    }

    #[must_use]
    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
