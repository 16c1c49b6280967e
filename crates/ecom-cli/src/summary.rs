use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ecom_model::RunSummary;

const BANNER_RULE: &str = "------------------------------------------------------------------";

pub fn success_message(summary: &RunSummary) -> String {
    format!(
        "ETL process completed successfully. Processed data saved to: {}",
        summary.output_dir.display()
    )
}

/// Delimited failure banner with the full error chain.
pub fn failure_banner(error: &anyhow::Error) -> String {
    format!("{BANNER_RULE}\n{BANNER_RULE}\nETL process failed: {error:#}\n{BANNER_RULE}\n{BANNER_RULE}")
}

pub fn print_summary(summary: &RunSummary) {
    println!("{}", success_message(summary));
    println!("Input: {} ({})", summary.input.display(), summary.source_format);
    println!(
        "Rows read: {}, dropped for missing keys: {}",
        summary.rows_read, summary.rows_dropped
    );
    println!("{}", summary_table(summary));
}

pub fn print_json_summary(summary: &RunSummary) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

fn summary_table(summary: &RunSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Records"),
        header_cell("Columns"),
        header_cell("File"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in &summary.tables {
        let file = entry
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        table.add_row(vec![
            table_cell(&entry.name),
            count_cell(entry.records),
            Cell::new(entry.columns.len()),
            Cell::new(file),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total_records()).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell(summary.output_format.extension()),
    ]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn table_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count)
    }
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
