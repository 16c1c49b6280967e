use anyhow::Result;
use chrono::Local;
use comfy_table::{Cell, Table};

use ecom_cli::pipeline::run_etl;
use ecom_cli::types::EtlRequest;
use ecom_model::{RunSummary, SubTableKind};

use crate::cli::RunArgs;
use crate::summary::{apply_table_style, dim_cell, header_cell, table_cell};

pub fn run_command(args: &RunArgs) -> Result<RunSummary> {
    let run_date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let request = EtlRequest::new(&args.input, run_date)
        .with_output_root(&args.output_root)
        .with_format(args.format.into());
    run_etl(&request)
}

pub fn run_tables() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Columns"),
        header_cell("Synthetic key"),
    ]);
    apply_table_style(&mut table);
    for kind in SubTableKind::ALL {
        table.add_row(vec![
            table_cell(kind.name()),
            Cell::new(kind.output_columns().join(", ")),
            match kind.synthetic_key() {
                Some(key) => Cell::new(key),
                None => dim_cell("-"),
            },
        ]);
    }
    println!("{table}");
    Ok(())
}
