use std::path::Path;

use ecom_model::SourceFormat;
use polars::prelude::DataFrame;
use tracing::{debug, info};

use crate::csv_reader::read_csv_table;
use crate::error::Result;
use crate::xlsx::read_xlsx_table;

/// Load a source file into a DataFrame, picking the reader from the extension.
///
/// An empty path fails with [`FormatError::Missing`](ecom_model::FormatError::Missing)
/// and any extension other than `.csv` / `.xlsx` with
/// [`FormatError::Unsupported`](ecom_model::FormatError::Unsupported). Parse
/// and I/O failures from the underlying reader are returned unchanged.
pub fn extract(path: &Path) -> Result<DataFrame> {
    let format = SourceFormat::from_path(path)?;
    debug!(path = %path.display(), %format, "reading source file");

    let df = match format {
        SourceFormat::Csv => read_csv_table(path)?,
        SourceFormat::Xlsx => read_xlsx_table(path)?,
    };

    info!(
        path = %path.display(),
        %format,
        rows = df.height(),
        columns = df.width(),
        "source loaded"
    );
    Ok(df)
}
