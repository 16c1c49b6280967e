//! Data model for the e-commerce order ETL.
//!
//! - **format**: source and output file formats, resolved from extensions or names
//! - **schema**: source column names and the fixed sub-table projections
//! - **table**: [`SubTable`], a named projection of the source table
//! - **summary**: serializable record of a pipeline run

pub mod format;
pub mod schema;
pub mod summary;
pub mod table;

pub use format::{FormatError, OutputFormat, SourceFormat};
pub use schema::{REQUIRED_KEYS, SHIPPING_ID, SOURCE_COLUMNS, SubTableKind};
pub use summary::{RunSummary, TableSummary};
pub use table::{SubTable, derive_table_name};
