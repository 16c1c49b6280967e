//! Transform stage of the e-commerce order ETL.
//!
//! - **normalization**: drop rows without order/customer ids, parse order dates
//!   in mixed mode
//! - **decompose**: project the cleaned table onto the five sub-tables, remove
//!   exact duplicates, add the shipping synthetic key
//! - **pipeline**: both steps in sequence

pub mod decompose;
pub mod error;
pub mod normalization;
pub mod pipeline;

pub use decompose::{
    DecomposedTables, assign_synthetic_key, decompose, decompose_table, dedupe_rows, project,
};
pub use error::{Result, TransformError};
pub use normalization::{
    NormalizedTable, drop_missing_keys, normalize_date_column, normalize_orders,
    parse_mixed_datetime,
};
pub use pipeline::{TransformOutput, transform};
