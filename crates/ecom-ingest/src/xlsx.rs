//! Excel workbook reading via `calamine`.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use ecom_common::format_numeric;

use crate::error::{IngestError, Result};

/// Largest integer a workbook float can carry without losing precision.
const MAX_EXACT_FLOAT_INT: f64 = 9_007_199_254_740_992.0;

/// Column type inferred from the cells of a worksheet column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Int,
    Float,
    Text,
}

/// Reads the first worksheet of a workbook into a Polars DataFrame.
///
/// The first row is the header. A column whose cells are all integral numbers
/// becomes `Int64`, one with any fractional number becomes `Float64`, and
/// anything else becomes `String`. Empty cells are null.
pub fn read_xlsx_table(path: &Path) -> Result<DataFrame> {
    std::fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;

    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::EmptyWorkbook {
            path: path.to_path_buf(),
        })?
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| IngestError::EmptyWorkbook {
        path: path.to_path_buf(),
    })?;
    let names: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(idx, cell)| header_name(idx, cell))
        .collect();

    let mut cells: Vec<Vec<Data>> = vec![Vec::with_capacity(range.height()); names.len()];
    for row in rows {
        for (idx, column) in cells.iter_mut().enumerate() {
            column.push(row.get(idx).cloned().unwrap_or(Data::Empty));
        }
    }

    let columns: Vec<Column> = names
        .iter()
        .zip(&cells)
        .map(|(name, values)| build_column(name, values))
        .collect();
    tracing::debug!(
        path = %path.display(),
        columns = columns.len(),
        "worksheet read"
    );
    Ok(DataFrame::new(columns)?)
}

fn header_name(idx: usize, cell: &Data) -> String {
    match cell {
        Data::Empty => format!("Unnamed: {idx}"),
        other => cell_text(other).unwrap_or_default().trim().to_string(),
    }
}

fn infer_kind(values: &[Data]) -> CellKind {
    let mut kind = CellKind::Int;
    let mut seen = false;
    for value in values {
        match value {
            Data::Empty => continue,
            Data::Int(_) => {}
            Data::Float(v) if is_integral(*v) => {}
            Data::Float(_) => kind = CellKind::Float,
            _ => return CellKind::Text,
        }
        seen = true;
    }
    if seen { kind } else { CellKind::Text }
}

fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT_FLOAT_INT
}

fn build_column(name: &str, values: &[Data]) -> Column {
    match infer_kind(values) {
        CellKind::Int => {
            let ints: Vec<Option<i64>> = values
                .iter()
                .map(|value| match value {
                    Data::Int(v) => Some(*v),
                    Data::Float(v) => Some(*v as i64),
                    _ => None,
                })
                .collect();
            Series::new(name.into(), ints).into_column()
        }
        CellKind::Float => {
            let floats: Vec<Option<f64>> = values
                .iter()
                .map(|value| match value {
                    Data::Int(v) => Some(*v as f64),
                    Data::Float(v) => Some(*v),
                    _ => None,
                })
                .collect();
            Series::new(name.into(), floats).into_column()
        }
        CellKind::Text => {
            let strings: Vec<Option<String>> = values.iter().map(cell_text).collect();
            Series::new(name.into(), strings).into_column()
        }
    }
}

fn cell_text(value: &Data) -> Option<String> {
    match value {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(v) => Some(format_numeric(*v)),
        Data::DateTime(dt) => Some(
            dt.as_datetime()
                .map(|value| value.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| format_numeric(dt.as_f64())),
        ),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
