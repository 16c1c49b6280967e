use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::format::{OutputFormat, SourceFormat};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSummary {
    pub name: String,
    pub records: usize,
    pub columns: Vec<String>,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub source_format: SourceFormat,
    pub output_dir: PathBuf,
    pub output_format: OutputFormat,
    pub run_date: NaiveDate,
    pub rows_read: usize,
    pub rows_dropped: usize,
    pub tables: Vec<TableSummary>,
}

impl RunSummary {
    pub fn total_records(&self) -> usize {
        self.tables.iter().map(|table| table.records).sum()
    }
}
