//! Row cleaning and date normalization applied before decomposition.

mod datetime;
mod missing;

pub use datetime::{normalize_date_column, parse_mixed_datetime};
pub use missing::drop_missing_keys;

use ecom_model::REQUIRED_KEYS;
use ecom_model::schema::ORDER_DATE;
use polars::prelude::DataFrame;
use tracing::{info, warn};

use crate::error::Result;

/// Source table after normalization.
#[derive(Debug, Clone)]
pub struct NormalizedTable {
    pub data: DataFrame,
    /// Rows in the table handed to [`normalize_orders`].
    pub rows_read: usize,
    /// Rows removed for a missing order or customer id.
    pub rows_dropped: usize,
}

/// Drop rows without `Order_ID` / `Customer_ID`, then parse `Order_Date`.
///
/// An unparseable date fails the whole table; no row is skipped for it.
pub fn normalize_orders(df: &DataFrame) -> Result<NormalizedTable> {
    let rows_read = df.height();
    let (cleaned, rows_dropped) = drop_missing_keys(df, &REQUIRED_KEYS)?;
    if rows_dropped > 0 {
        warn!(
            rows_dropped,
            keys = ?REQUIRED_KEYS,
            "dropped rows with missing keys"
        );
    }
    let data = normalize_date_column(&cleaned, ORDER_DATE)?;
    info!(rows_read, rows_kept = data.height(), "normalization complete");
    Ok(NormalizedTable {
        data,
        rows_read,
        rows_dropped,
    })
}
