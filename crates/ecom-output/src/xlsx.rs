//! Single-sheet workbook writer.

use std::path::Path;

use ecom_common::{any_to_f64, any_to_string};
use polars::prelude::{AnyValue, DataFrame};
use rust_xlsxwriter::{Workbook, XlsxError};

use crate::error::{OutputError, Result};

const SHEET_NAME: &str = "Sheet1";

/// Write `df` as one worksheet with a header row.
///
/// Numeric cells are written as numbers, booleans as booleans, everything
/// else as text. Nulls leave the cell empty.
pub(crate) fn write_xlsx(df: &DataFrame, path: &Path) -> Result<()> {
    let xlsx_err = |err: XlsxError| OutputError::Xlsx {
        path: path.to_path_buf(),
        message: err.to_string(),
    };

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME).map_err(xlsx_err)?;

    for (col_idx, column) in df.get_columns().iter().enumerate() {
        let col = u16::try_from(col_idx).map_err(|_| OutputError::Xlsx {
            path: path.to_path_buf(),
            message: format!("too many columns: {}", df.width()),
        })?;
        sheet
            .write_string(0, col, column.name().as_str())
            .map_err(xlsx_err)?;

        for row_idx in 0..df.height() {
            let row = u32::try_from(row_idx + 1).map_err(|_| OutputError::Xlsx {
                path: path.to_path_buf(),
                message: format!("too many rows: {}", df.height()),
            })?;
            let value = column.get(row_idx)?;
            match value {
                AnyValue::Null => {}
                AnyValue::Boolean(flag) => {
                    sheet.write_boolean(row, col, flag).map_err(xlsx_err)?;
                }
                other => {
                    if let Some(number) = any_to_f64(other.clone()) {
                        sheet.write_number(row, col, number).map_err(xlsx_err)?;
                    } else {
                        sheet
                            .write_string(row, col, any_to_string(other))
                            .map_err(xlsx_err)?;
                    }
                }
            }
        }
    }

    workbook.save(path).map_err(xlsx_err)
}
