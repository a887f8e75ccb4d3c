//! Hotspot Dashboard Library
//!
//! The data pipeline behind a waste hotspot monitoring dashboard. Given a
//! snapshot of geotagged hotspot records it produces everything a display
//! surface needs for one render cycle, without touching any UI toolkit, tile
//! provider or database itself.
//!
//! This library provides tools for:
//! - Resolving a user selection against the loaded records
//! - Projecting records onto a map descriptor with escaped marker popups
//! - Formatting a localized detail view for the selected hotspot
//! - Exporting hotspot and auxiliary tables as CSV or XLSX
//! - Loading and normalizing record and dataset files from disk

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod dashboard;
        pub mod detail_formatter;
        pub mod map_projector;
        pub mod selection_resolver;
        pub mod table_exporter;

        #[cfg(test)]
        pub mod tests;
    }
    pub mod adapters {
        pub mod auxiliary;
        pub mod images;
        pub mod record_store;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Coordinates, HotspotRecord, RecordId, SelectionKey};
pub use config::Config;

/// Result type alias for the hotspot dashboard
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for hotspot dashboard operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Selection key has no matching record
    #[error("No hotspot matches selection key '{key}'")]
    NotFound { key: String },

    /// Requested column does not exist on the exported table
    #[error("Unknown column '{column}' (available: {})", .available.join(", "))]
    Schema {
        column: String,
        available: Vec<String>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Malformed record input
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV reading or writing error
    #[error("CSV error in '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// TOML configuration could not be parsed
    #[error("Failed to parse configuration file '{file}'")]
    ConfigParsing {
        file: String,
        #[source]
        source: toml::de::Error,
    },

    /// SQLite record source error
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Spreadsheet serialization error
    #[error("Spreadsheet error: {message}")]
    Spreadsheet {
        message: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

impl Error {
    /// Create a not found error for a selection key
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Create a schema error naming the missing column
    pub fn schema(column: impl Into<String>, available: &[String]) -> Self {
        Self::Schema {
            column: column.into(),
            available: available.to_vec(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a database error with context
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Create a spreadsheet serialization error
    pub fn spreadsheet(message: impl Into<String>, source: rust_xlsxwriter::XlsxError) -> Self {
        Self::Spreadsheet {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV processing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        Self::Spreadsheet {
            message: "Workbook generation failed".to_string(),
            source: error,
        }
    }
}
