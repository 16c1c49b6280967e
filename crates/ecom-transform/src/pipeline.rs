//! Normalization followed by decomposition.

use polars::prelude::DataFrame;
use tracing::info;

use crate::decompose::{DecomposedTables, decompose};
use crate::error::Result;
use crate::normalization::normalize_orders;

/// Result of the transform stage.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub tables: DecomposedTables,
    pub rows_read: usize,
    pub rows_dropped: usize,
}

/// Normalize the raw source table and decompose it into sub-tables.
pub fn transform(raw: &DataFrame) -> Result<TransformOutput> {
    let normalized = normalize_orders(raw)?;
    let tables = decompose(&normalized.data)?;
    for table in tables.iter() {
        info!(table = %table.name, records = table.record_count(), "sub-table ready");
    }
    Ok(TransformOutput {
        tables,
        rows_read: normalized.rows_read,
        rows_dropped: normalized.rows_dropped,
    })
}
