//! Command implementations for the hotspot dashboard CLI
//!
//! Each command is implemented in its own module. All of them share one
//! [`shared::CommandContext`]: configuration resolved once per invocation,
//! with record and dataset loading on demand.

pub mod datasets;
pub mod detail;
pub mod export;
pub mod map;
pub mod render;
pub mod shared;

pub use shared::CommandContext;

use crate::cli::args::{Args, Commands};
use anyhow::Result;

/// Main command runner
///
/// Dispatches to the subcommand handler:
/// - `map`: map descriptor and warnings
/// - `detail`: detail panel for one hotspot
/// - `render`: full render cycle
/// - `export`: CSV/XLSX export of records or a dataset
/// - `datasets`: auxiliary dataset listing
pub fn run(args: Args) -> Result<()> {
    shared::setup_logging(&args.global)?;

    let Some(command) = args.get_command() else {
        anyhow::bail!("No command given. Run with --help to see available commands.");
    };

    let context = CommandContext::from_args(&args.global)?;

    match command {
        Commands::Map(select) => map::run_map(&context, select),
        Commands::Detail(select) => detail::run_detail(&context, select),
        Commands::Render(select) => render::run_render(&context, select),
        Commands::Export(export_args) => export::run_export(&context, export_args),
        Commands::Datasets => datasets::run_datasets(&context),
    }
}
