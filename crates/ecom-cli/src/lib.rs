//! CLI library components for the e-commerce order ETL.

pub mod logging;
pub mod pipeline;
pub mod types;
