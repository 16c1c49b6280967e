//! Write the decomposed sub-tables into the dated output directory.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use ecom_model::{OutputFormat, SubTable, TableSummary};
use tracing::info;

use crate::error::Result;
use crate::layout::{dated_output_dir, ensure_dir, table_file_name};
use crate::save::save_table;

/// Result of [`write_sub_tables`].
#[derive(Debug, Clone)]
pub struct WrittenTables {
    /// The dated directory the tables were written to.
    pub output_dir: PathBuf,
    /// One entry per table, in write order.
    pub tables: Vec<TableSummary>,
}

/// Write each table to `<root>/<date>/<name>.<ext>`, without an index column.
///
/// Tables are written in order; the first failure aborts the rest, leaving
/// any files already written in place.
pub fn write_sub_tables<'a>(
    tables: impl IntoIterator<Item = &'a SubTable>,
    root: &Path,
    date: NaiveDate,
    format: OutputFormat,
) -> Result<WrittenTables> {
    let output_dir = ensure_dir(&dated_output_dir(root, date))?;

    let mut written = Vec::new();
    for table in tables {
        let path = output_dir.join(table_file_name(table, format));
        save_table(&table.data, &path, Some(format), false)?;
        info!(
            table = %table.name,
            records = table.record_count(),
            path = %path.display(),
            "table written"
        );
        written.push(TableSummary {
            name: table.name.clone(),
            records: table.record_count(),
            columns: table.column_names(),
            path,
        });
    }

    Ok(WrittenTables {
        output_dir,
        tables: written,
    })
}
