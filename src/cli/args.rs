//! Command-line argument definitions for the hotspot dashboard
//!
//! This module defines the CLI interface using the clap derive API. The CLI
//! acts as the display surface of the pipeline: it loads a record snapshot,
//! passes the user's selection in and prints or writes what comes out.

use crate::app::models::{RecordId, SelectionKey};
use crate::app::services::table_exporter::ExportFormat;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the hotspot dashboard
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hotspot-dashboard",
    version,
    about = "Map, inspect and export waste hotspot records",
    long_about = "Loads geotagged waste hotspot records and produces the map descriptor, \
                  detail panel and CSV/XLSX exports of the hotspot monitoring dashboard. \
                  Output is deterministic for a given record file and selection."
)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by every subcommand
#[derive(Debug, Clone, clap::Args)]
pub struct GlobalArgs {
    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// ~/.config/hotspot-dashboard/config.toml and falls back to defaults.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Hotspot records file (CSV or SQLite), overriding store.records_path
    #[arg(
        short = 'r',
        long = "records",
        value_name = "FILE",
        global = true,
        help = "Hotspot records file (CSV, or SQLite .db)"
    )]
    pub records_path: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for printed results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        global = true,
        help = "Output format for printed results"
    )]
    pub output_format: OutputFormat,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print the map descriptor and data quality warnings
    Map(SelectArgs),
    /// Print the detail panel for one hotspot
    Detail(SelectArgs),
    /// Run a full render cycle (map and detail)
    Render(SelectArgs),
    /// Export hotspot records or an auxiliary dataset as CSV or XLSX
    Export(ExportArgs),
    /// List configured auxiliary datasets
    Datasets,
}

/// Selection shared by the map, detail and render commands
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SelectArgs {
    /// Hotspot name to select
    ///
    /// The "show all" label of the configured language (All / Semua) selects
    /// nothing, like leaving the option out.
    #[arg(
        short = 's',
        long = "select",
        value_name = "NAME",
        conflicts_with = "select_id",
        help = "Select a hotspot by name"
    )]
    pub select: Option<String>,

    /// Hotspot id to select
    #[arg(long = "select-id", value_name = "ID", help = "Select a hotspot by id")]
    pub select_id: Option<String>,
}

impl SelectArgs {
    /// Convert the raw options into a selection key
    pub fn selection_key(&self, show_all_sentinel: &str) -> SelectionKey {
        match &self.select_id {
            Some(id) => SelectionKey::ById(RecordId::parse(id)),
            None => SelectionKey::parse(self.select.as_deref(), show_all_sentinel),
        }
    }
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Export an auxiliary dataset instead of the hotspot records
    #[arg(
        short = 'd',
        long = "dataset",
        value_name = "NAME",
        help = "Auxiliary dataset to export instead of hotspot records"
    )]
    pub dataset: Option<String>,

    /// Columns to export, in order (comma-separated list)
    ///
    /// Use row_number for a 1-based row index. Defaults to export.columns
    /// from the configuration for hotspot exports and to every column for
    /// dataset exports.
    #[arg(
        long = "columns",
        value_name = "LIST",
        help = "Comma-separated list of columns to export"
    )]
    pub columns: Option<ColumnList>,

    /// Export format (csv or xlsx), defaults to export.format
    #[arg(short = 'f', long = "format", value_name = "FORMAT", help = "Export format (csv, xlsx)")]
    pub format: Option<ExportFormat>,

    /// Output file, defaults to the suggested filename in the current directory
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        conflicts_with = "stdout",
        help = "Output file for the export"
    )]
    pub output: Option<PathBuf>,

    /// Write the serialized export to stdout
    #[arg(long = "stdout", help = "Write the export to stdout instead of a file")]
    pub stdout: bool,
}

/// Output format options for printed results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Wrapper for parsing comma-separated column lists
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnList {
    pub columns: Vec<String>,
}

impl FromStr for ColumnList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let columns: Vec<String> = s
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if columns.is_empty() {
            return Err(Error::configuration(
                "Column list cannot be empty".to_string(),
            ));
        }

        Ok(ColumnList { columns })
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Option<&Commands> {
        self.command.as_ref()
    }
}

impl GlobalArgs {
    /// Get the log level based on verbosity and quiet settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }

        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
