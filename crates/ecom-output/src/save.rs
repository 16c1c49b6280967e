//! Generic table save: one frame, one file.

use std::fs::File;
use std::path::Path;

use ecom_model::OutputFormat;
use polars::prelude::{CsvWriter, DataFrame, JsonFormat, JsonWriter, ParquetWriter, SerWriter};
use tracing::debug;

use crate::error::{OutputError, Result};
use crate::xlsx::write_xlsx;

/// Name of the row-index column added when `include_index` is set.
pub const INDEX_COLUMN: &str = "index";

/// Write `df` to `path`.
///
/// When `format` is `None` it is inferred from the path's extension. With
/// `include_index` an `index` column numbering rows from 0 is prepended.
/// Returns the format that was written.
pub fn save_table(
    df: &DataFrame,
    path: &Path,
    format: Option<OutputFormat>,
    include_index: bool,
) -> Result<OutputFormat> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::MissingTarget);
    }
    let format = match format {
        Some(format) => format,
        None => OutputFormat::from_path(path)?,
    };

    let mut frame = if include_index {
        df.with_row_index(INDEX_COLUMN.into(), None)?
    } else {
        df.clone()
    };

    match format {
        OutputFormat::Csv => write_csv(&mut frame, path)?,
        OutputFormat::Xlsx => write_xlsx(&frame, path)?,
        OutputFormat::Parquet => write_parquet(&mut frame, path)?,
        OutputFormat::Json => write_json(&mut frame, path)?,
    }

    debug!(
        path = %path.display(),
        %format,
        rows = frame.height(),
        columns = frame.width(),
        "table saved"
    );
    Ok(format)
}

fn create_file(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| OutputError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

fn serialize_error(path: &Path, format: OutputFormat, err: impl ToString) -> OutputError {
    OutputError::Serialize {
        path: path.to_path_buf(),
        format,
        message: err.to_string(),
    }
}

fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = create_file(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(df)
        .map_err(|err| serialize_error(path, OutputFormat::Csv, err))
}

fn write_parquet(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = create_file(path)?;
    ParquetWriter::new(file)
        .finish(df)
        .map(|_| ())
        .map_err(|err| serialize_error(path, OutputFormat::Parquet, err))
}

/// Rows as an array of objects keyed by column name.
fn write_json(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = create_file(path)?;
    JsonWriter::new(&mut file)
        .with_json_format(JsonFormat::Json)
        .finish(df)
        .map_err(|err| serialize_error(path, OutputFormat::Json, err))
}
