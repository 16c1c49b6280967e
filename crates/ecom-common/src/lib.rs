//! Shared utilities for the e-commerce ETL crates.

pub mod polars_utils;

pub use polars_utils::{any_to_f64, any_to_string, cell_key, format_numeric, is_blank};
