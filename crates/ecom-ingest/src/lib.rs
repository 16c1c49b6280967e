//! Source ingestion for the e-commerce order ETL.
//!
//! Loads the flat order export into a Polars [`DataFrame`](polars::prelude::DataFrame).
//! The file format is picked from the extension:
//!
//! - **CSV** (`.csv`): header probe with the `csv` crate, then a Polars load with
//!   type inference
//! - **XLSX** (`.xlsx`): first worksheet via `calamine`, first row as header
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use ecom_ingest::extract;
//!
//! let df = extract(Path::new("raw/orders.csv"))?;
//! println!("{} rows", df.height());
//! ```

mod csv_reader;
mod error;
mod extract;
mod xlsx;

// === Error Types ===
pub use error::{IngestError, Result};

// === Readers ===
pub use csv_reader::{read_csv_headers, read_csv_table};
pub use extract::extract;
pub use xlsx::read_xlsx_table;
