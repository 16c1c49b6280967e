//! Integration tests for format dispatch and loading.

use std::io::Write;
use std::path::Path;

use ecom_ingest::{IngestError, extract};
use ecom_model::FormatError;
use polars::prelude::{AnyValue, DataType};
use rust_xlsxwriter::Workbook;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn extract_rejects_unsupported_extension() {
    let result = extract(Path::new("data.txt"));
    assert!(matches!(
        result,
        Err(IngestError::Format(FormatError::Unsupported { .. }))
    ));
}

#[test]
fn extract_rejects_empty_path() {
    let result = extract(Path::new(""));
    assert!(matches!(
        result,
        Err(IngestError::Format(FormatError::Missing))
    ));
}

#[test]
fn extract_missing_csv_is_not_found() {
    let result = extract(Path::new("/nonexistent/orders.csv"));
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn extract_csv() {
    let mut file = NamedTempFile::with_suffix(".csv").unwrap();
    write!(
        file,
        "Order_ID,Customer_ID,Order_Date\n1,10,2024-01-05\n2,11,01/02/2024\n"
    )
    .unwrap();

    let df = extract(file.path()).unwrap();
    assert_eq!(df.height(), 2);
    assert_eq!(df.column("Order_Date").unwrap().dtype(), &DataType::String);
}

fn long_csv(late_row: usize, late_line: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".csv").unwrap();
    writeln!(file, "Order_ID,Price").unwrap();
    for row in 1..=150 {
        if row == late_row {
            writeln!(file, "{late_line}").unwrap();
        } else {
            writeln!(file, "{row},20").unwrap();
        }
    }
    file
}

#[test]
fn extract_csv_late_float_widens_column() {
    let file = long_csv(120, "120,19.99");

    let df = extract(file.path()).unwrap();

    assert_eq!(df.height(), 150);
    let price = df.column("Price").unwrap();
    assert_eq!(price.dtype(), &DataType::Float64);
    assert_eq!(price.get(119).unwrap(), AnyValue::Float64(19.99));
    assert_eq!(price.get(0).unwrap(), AnyValue::Float64(20.0));
}

#[test]
fn extract_csv_late_text_makes_string_column() {
    let file = long_csv(120, "ORD-X,20");

    let df = extract(file.path()).unwrap();

    assert_eq!(df.height(), 150);
    let order_id = df.column("Order_ID").unwrap();
    assert_eq!(order_id.dtype(), &DataType::String);
    assert_eq!(order_id.get(119).unwrap(), AnyValue::String("ORD-X"));
    assert_eq!(order_id.get(0).unwrap(), AnyValue::String("1"));
}

#[test]
fn extract_xlsx_infers_column_types() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orders.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Order_ID").unwrap();
    sheet.write_string(0, 1, "Price").unwrap();
    sheet.write_string(0, 2, "Brand").unwrap();
    sheet.write_number(1, 0, 1.0).unwrap();
    sheet.write_number(1, 1, 19.99).unwrap();
    sheet.write_string(1, 2, "Acme").unwrap();
    sheet.write_number(2, 0, 2.0).unwrap();
    sheet.write_number(2, 1, 5.0).unwrap();
    workbook.save(&path).unwrap();

    let df = extract(&path).unwrap();
    assert_eq!(df.height(), 2);
    assert_eq!(df.column("Order_ID").unwrap().dtype(), &DataType::Int64);
    assert_eq!(df.column("Price").unwrap().dtype(), &DataType::Float64);
    assert_eq!(df.column("Brand").unwrap().dtype(), &DataType::String);
    assert_eq!(df.column("Brand").unwrap().get(1).unwrap(), AnyValue::Null);
}

#[test]
fn extract_xlsx_missing_file_is_not_found() {
    let result = extract(Path::new("/nonexistent/orders.xlsx"));
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}
