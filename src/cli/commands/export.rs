//! Export command: serialize hotspot records or an auxiliary dataset

use super::shared::{CommandContext, format_size, print_json};
use crate::app::services::table_exporter::{self, ExportPayload, TableSource};
use crate::cli::args::ExportArgs;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Serialize)]
struct ExportSummary<'a> {
    table: &'a str,
    path: String,
    content_type: &'a str,
    rows: usize,
    columns: &'a [String],
    bytes: usize,
}

pub fn run_export(context: &CommandContext, args: &ExportArgs) -> Result<()> {
    let format = args.format.unwrap_or(context.config.export.format);

    let payload = match &args.dataset {
        Some(name) => {
            let catalog = context.load_datasets()?;
            let table = catalog.get(name).context("Unknown dataset")?;
            let columns = match &args.columns {
                Some(list) => list.columns.clone(),
                None => table.column_names(),
            };
            table_exporter::export(table, &columns, format)
        }
        None => {
            let records = context.load_records()?;
            let columns = match &args.columns {
                Some(list) => list.columns.clone(),
                None => context.config.export.columns.clone(),
            };
            table_exporter::export(records.as_slice(), &columns, format)
        }
    }
    .context("Export failed")?;

    if args.stdout {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(&payload.serialized)
            .and_then(|_| stdout.flush())
            .context("Failed to write export to stdout")?;
        return Ok(());
    }

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&payload.suggested_filename));
    std::fs::write(&path, &payload.serialized)
        .with_context(|| format!("Failed to write export to {}", path.display()))?;

    info!(
        "Export of '{}' written to {} ({})",
        payload.table.name,
        path.display(),
        format_size(payload.serialized.len() as u64)
    );

    report(context, &payload, &path)
}

fn report(context: &CommandContext, payload: &ExportPayload, path: &std::path::Path) -> Result<()> {
    if context.is_json() {
        return print_json(&ExportSummary {
            table: &payload.table.name,
            path: path.display().to_string(),
            content_type: payload.content_type,
            rows: payload.table.rows.len(),
            columns: &payload.table.columns,
            bytes: payload.serialized.len(),
        });
    }

    println!(
        "Exported {} rows of '{}' to {} ({}, {})",
        payload.table.rows.len(),
        payload.table.name,
        path.display(),
        payload.content_type,
        format_size(payload.serialized.len() as u64)
    );
    Ok(())
}
