//! ETL pipeline with explicit stages.
//!
//! The stages run in strict sequence; the first failure aborts the run:
//! 1. **Extract**: load the source file into a frame
//! 2. **Transform**: drop rows without keys, normalize order dates, decompose
//!    into the five sub-tables
//! 3. **Load**: write the sub-tables into `<root>/<date>/`
//!
//! Files already written when a later write fails are left in place.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{Level, info, info_span, trace};

use ecom_common::any_to_string;
use ecom_ingest::extract;
use ecom_model::{RunSummary, SourceFormat, SubTable};
use ecom_output::{WrittenTables, write_sub_tables};
use ecom_transform::{DecomposedTables, TransformOutput, transform};

use crate::logging::redact_cell;
use crate::types::EtlRequest;

/// Rows per sub-table echoed at trace level.
const SAMPLE_ROWS: usize = 3;

/// Run extract, transform and load for one input file.
pub fn run_etl(request: &EtlRequest) -> Result<RunSummary> {
    let etl_span = info_span!(
        "etl",
        input = %request.input.display(),
        run_date = %request.run_date
    );
    let _etl_guard = etl_span.enter();
    let start = Instant::now();

    let source_format = SourceFormat::from_path(&request.input)
        .with_context(|| format!("resolve format of {}", request.input.display()))?;

    let raw = extract_stage(&request.input)?;
    let transformed = transform_stage(&raw)?;
    let written = load_stage(&transformed.tables, request)?;

    let summary = RunSummary {
        input: request.input.clone(),
        source_format,
        output_dir: written.output_dir,
        output_format: request.format,
        run_date: request.run_date,
        rows_read: transformed.rows_read,
        rows_dropped: transformed.rows_dropped,
        tables: written.tables,
    };
    info!(
        tables = summary.tables.len(),
        records = summary.total_records(),
        output_dir = %summary.output_dir.display(),
        duration_ms = start.elapsed().as_millis(),
        "etl complete"
    );
    Ok(summary)
}

/// Stage 1: load the source file.
pub fn extract_stage(input: &Path) -> Result<DataFrame> {
    let span = info_span!("extract", input = %input.display());
    span.in_scope(|| {
        let start = Instant::now();
        let df = extract(input).with_context(|| format!("extract {}", input.display()))?;
        info!(
            rows = df.height(),
            columns = df.width(),
            duration_ms = start.elapsed().as_millis(),
            "extract complete"
        );
        Ok(df)
    })
}

/// Stage 2: normalize and decompose.
pub fn transform_stage(raw: &DataFrame) -> Result<TransformOutput> {
    let span = info_span!("transform", rows = raw.height());
    span.in_scope(|| {
        let start = Instant::now();
        let output = transform(raw).context("transform orders")?;
        if tracing::enabled!(Level::TRACE) {
            for table in output.tables.iter() {
                trace_sample_rows(table);
            }
        }
        info!(
            rows_read = output.rows_read,
            rows_dropped = output.rows_dropped,
            duration_ms = start.elapsed().as_millis(),
            "transform complete"
        );
        Ok(output)
    })
}

/// Stage 3: write every sub-table.
pub fn load_stage(tables: &DecomposedTables, request: &EtlRequest) -> Result<WrittenTables> {
    let span = info_span!(
        "load",
        output_root = %request.output_root.display(),
        format = %request.format
    );
    span.in_scope(|| {
        let start = Instant::now();
        let written = write_sub_tables(
            tables.iter(),
            &request.output_root,
            request.run_date,
            request.format,
        )
        .with_context(|| format!("write tables under {}", request.output_root.display()))?;
        info!(
            files = written.tables.len(),
            output_dir = %written.output_dir.display(),
            duration_ms = start.elapsed().as_millis(),
            "load complete"
        );
        Ok(written)
    })
}

fn trace_sample_rows(table: &SubTable) {
    let columns = table.data.get_columns();
    for row in 0..table.record_count().min(SAMPLE_ROWS) {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| {
                let name = column.name().as_str();
                let value = column.get(row).map(any_to_string).unwrap_or_default();
                format!("{name}={}", redact_cell(name, &value))
            })
            .collect();
        trace!(table = %table.name, row, values = %cells.join(", "), "sample row");
    }
}
