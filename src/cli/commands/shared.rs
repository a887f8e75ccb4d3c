//! Shared components for CLI commands
//!
//! Logging setup, the per-invocation command context and output helpers used
//! across the command implementations.

use crate::app::adapters::auxiliary::DatasetCatalog;
use crate::app::adapters::record_store::RecordStore;
use crate::app::models::HotspotRecord;
use crate::cli::args::{GlobalArgs, OutputFormat};
use crate::config::Config;
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

/// Set up structured logging on stderr so stdout stays machine-readable
pub fn setup_logging(args: &GlobalArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hotspot_dashboard={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Configuration and output settings for one CLI invocation
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
    pub output_format: OutputFormat,
}

impl CommandContext {
    /// Resolve configuration from the global arguments and validate it
    pub fn from_args(args: &GlobalArgs) -> Result<Self> {
        let mut config = Config::load_or_default(args.config_file.as_deref())
            .context("Failed to load configuration")?;

        if let Some(records_path) = &args.records_path {
            config = config.with_records_path(records_path);
        }

        config.validate().context("Invalid configuration")?;

        Ok(Self {
            config,
            output_format: args.output_format,
        })
    }

    /// Load the hotspot record snapshot for this invocation
    pub fn load_records(&self) -> Result<Vec<HotspotRecord>> {
        let path = &self.config.store.records_path;
        RecordStore::from_config(&self.config.store)
            .load(&self.config.store)
            .with_context(|| format!("Failed to load hotspot records from {}", path.display()))
    }

    /// Load every configured auxiliary dataset
    pub fn load_datasets(&self) -> Result<DatasetCatalog> {
        DatasetCatalog::load(&self.config.datasets).context("Failed to load auxiliary datasets")
    }

    pub fn is_json(&self) -> bool {
        self.output_format == OutputFormat::Json
    }
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

/// Format a byte count in human-readable form
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}
