//! Output generation for the e-commerce order ETL.
//!
//! - **save**: write one table to a path in CSV, XLSX, Parquet or JSON
//! - **layout**: dated output directory and file naming
//! - **load**: write the decomposed sub-tables into the dated directory

mod error;
mod layout;
mod load;
mod save;
mod xlsx;

pub use ecom_model::derive_table_name;
pub use error::{OutputError, Result};
pub use layout::{DEFAULT_OUTPUT_ROOT, dated_output_dir, ensure_dir, table_file_name};
pub use load::{WrittenTables, write_sub_tables};
pub use save::{INDEX_COLUMN, save_table};
