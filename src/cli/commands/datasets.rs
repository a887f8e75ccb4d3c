//! Datasets command: list configured auxiliary tables

use super::shared::{CommandContext, print_json};
use crate::app::services::table_exporter::TableSource;
use anyhow::Result;
use colored::*;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct DatasetSummary<'a> {
    name: &'a str,
    rows: usize,
    columns: &'a [String],
}

pub fn run_datasets(context: &CommandContext) -> Result<()> {
    let catalog = context.load_datasets()?;

    let summaries: Vec<DatasetSummary<'_>> = catalog
        .tables()
        .iter()
        .map(|table| DatasetSummary {
            name: table.name(),
            rows: table.row_count(),
            columns: table.columns(),
        })
        .collect();

    if context.is_json() {
        return print_json(&summaries);
    }

    if summaries.is_empty() {
        println!("{}", "No auxiliary datasets configured".dimmed());
        return Ok(());
    }

    println!("{}", "Auxiliary Datasets".bold());
    for summary in &summaries {
        println!(
            "  {} ({} rows): {}",
            summary.name.bold(),
            summary.rows,
            summary.columns.join(", ")
        );
    }
    Ok(())
}
