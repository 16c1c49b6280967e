//! CSV file reading.

use std::fs::File;
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

/// Reads the header row of a CSV file.
///
/// A UTF-8 BOM in front of the first column name is dropped.
pub fn read_csv_headers(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);
    let record = reader.headers().map_err(|e| IngestError::CsvHeader {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let columns: Vec<String> = record
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            if idx == 0 {
                name.trim_start_matches('\u{feff}').to_string()
            } else {
                name.to_string()
            }
        })
        .collect();

    if columns.iter().all(|name| name.trim().is_empty()) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(columns)
}

/// Reads a CSV file into a Polars DataFrame.
///
/// The first row is the header, with names taken from [`read_csv_headers`].
/// Column types are inferred from every row, so a late `19.99` in an
/// otherwise integral column loads as a float; empty fields load as null.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    let headers = read_csv_headers(path)?;
    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        "CSV header read"
    );

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    apply_headers(&mut df, &headers)?;
    Ok(df)
}

/// Rename loaded columns to the probed header names where they differ only
/// by a leading BOM.
fn apply_headers(df: &mut DataFrame, headers: &[String]) -> Result<()> {
    let loaded: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    for (current, probed) in loaded.iter().zip(headers) {
        if current != probed && current.trim_start_matches('\u{feff}') == probed {
            df.rename(current, probed.as_str().into())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{AnyValue, DataType, IntoColumn, NamedFrom, Series};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_headers() {
        let file = create_temp_csv("Order_ID,Customer_ID,Price\n1,10,9.5\n");
        let headers = read_csv_headers(file.path()).unwrap();
        assert_eq!(headers, vec!["Order_ID", "Customer_ID", "Price"]);
    }

    #[test]
    fn test_read_csv_headers_with_bom() {
        let file = create_temp_csv("\u{feff}Order_ID,Customer_ID\n1,10\n");
        let headers = read_csv_headers(file.path()).unwrap();
        assert_eq!(headers[0], "Order_ID");
    }

    #[test]
    fn test_read_csv_table_without_bom_in_column_names() {
        let file = create_temp_csv("\u{feff}Order_ID,Customer_ID\n1,10\n");
        let df = read_csv_table(file.path()).unwrap();
        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["Order_ID", "Customer_ID"]);
        assert!(df.column("Order_ID").is_ok());
    }

    #[test]
    fn test_apply_headers_strips_bom() {
        let mut df = DataFrame::new(vec![
            Series::new("\u{feff}Order_ID".into(), vec![1i64]).into_column(),
        ])
        .unwrap();
        apply_headers(&mut df, &["Order_ID".to_string()]).unwrap();
        assert_eq!(df.get_column_names()[0].as_str(), "Order_ID");
    }

    #[test]
    fn test_read_csv_headers_empty_file() {
        let file = create_temp_csv("");
        let result = read_csv_headers(file.path());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_csv_headers_missing_file() {
        let result = read_csv_headers(Path::new("/nonexistent/orders.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_csv_table_infers_types() {
        let file = create_temp_csv("Order_ID,Customer_ID,Price,Brand\n1,10,9.5,Acme\n2,,12,Zen\n");
        let df = read_csv_table(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 4);
        assert_eq!(df.column("Order_ID").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("Price").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("Brand").unwrap().dtype(), &DataType::String);
        assert_eq!(
            df.column("Customer_ID").unwrap().get(1).unwrap(),
            AnyValue::Null
        );
    }
}
