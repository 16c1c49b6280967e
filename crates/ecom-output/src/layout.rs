//! Output directory layout and file naming.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use ecom_model::{OutputFormat, SubTable};

use crate::error::{OutputError, Result};

/// Root directory used when the caller does not choose one.
pub const DEFAULT_OUTPUT_ROOT: &str = "processed-data";

/// Dated run directory: `<root>/<YYYY-MM-DD>`.
pub fn dated_output_dir(root: &Path, date: NaiveDate) -> PathBuf {
    root.join(date.format("%Y-%m-%d").to_string())
}

/// Create `path` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(path: &Path) -> Result<PathBuf> {
    fs::create_dir_all(path).map_err(|source| OutputError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}

/// File name for a sub-table, e.g. `Customer.csv`.
pub fn table_file_name(table: &SubTable, format: OutputFormat) -> String {
    format!("{}.{}", table.name, format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataFrame;

    #[test]
    fn dated_dir_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            dated_output_dir(Path::new("processed-data"), date),
            PathBuf::from("processed-data/2024-03-07")
        );
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("a").join("b");
        assert_eq!(ensure_dir(&dir).unwrap(), dir);
        assert_eq!(ensure_dir(&dir).unwrap(), dir);
        assert!(dir.is_dir());
    }

    #[test]
    fn ensure_dir_over_a_file_fails() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("taken");
        fs::write(&file, "x").unwrap();
        let err = ensure_dir(&file.join("child")).unwrap_err();
        assert!(matches!(err, OutputError::CreateDir { .. }));
    }

    #[test]
    fn file_name_follows_format() {
        let table = SubTable::new("Order_payment", DataFrame::empty());
        assert_eq!(table_file_name(&table, OutputFormat::Csv), "Order_payment.csv");
        assert_eq!(table_file_name(&table, OutputFormat::Json), "Order_payment.json");
    }
}
