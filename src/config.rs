//! Configuration management and validation.
//!
//! Provides the dashboard configuration: map projection settings, record
//! store layout and column aliases, detail panel language, export defaults
//! and the auxiliary dataset catalog. Configuration is read from TOML; every
//! section falls back to the dashboard defaults when it is absent.

use crate::app::services::detail_formatter::Locale;
use crate::app::services::map_projector::MapOptions;
use crate::app::services::table_exporter::ExportFormat;
use crate::constants::{self, columns};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

// =============================================================================
// Map Settings
// =============================================================================

/// Map projection settings as written in configuration
///
/// Fields are optional so that a `[map]` section missing a required value is
/// reported by [`MapOptions::from_settings`] instead of being silently filled
/// in. Only an entirely absent `[map]` section takes the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSettings {
    /// Overview center as `[latitude, longitude]`
    pub default_center: Option<(f64, f64)>,

    /// Overview zoom level
    pub default_zoom: Option<u8>,

    /// Zoom level when a hotspot is selected
    pub selected_zoom: Option<u8>,

    /// Marker colors
    pub color_scheme: Option<ColorSchemeSettings>,

    /// Tile layer, defaults to satellite imagery when omitted
    #[serde(default = "default_tile_source")]
    pub tile_source: Option<TileSourceSettings>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSchemeSettings {
    pub default: Option<String>,
    pub highlight: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileSourceSettings {
    pub url_template: Option<String>,
    pub attribution: Option<String>,
}

fn default_tile_source() -> Option<TileSourceSettings> {
    Some(TileSourceSettings {
        url_template: Some(constants::DEFAULT_TILE_URL.to_string()),
        attribution: Some(constants::DEFAULT_TILE_ATTRIBUTION.to_string()),
    })
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            default_center: Some(constants::DEFAULT_CENTER),
            default_zoom: Some(constants::DEFAULT_ZOOM),
            selected_zoom: Some(constants::DEFAULT_SELECTED_ZOOM),
            color_scheme: Some(ColorSchemeSettings {
                default: Some(constants::DEFAULT_MARKER_COLOR.to_string()),
                highlight: Some(constants::DEFAULT_HIGHLIGHT_COLOR.to_string()),
            }),
            tile_source: default_tile_source(),
        }
    }
}

// =============================================================================
// Record Store
// =============================================================================

/// Source header names accepted for each canonical record column
///
/// The canonical name itself is always accepted; matching ignores case and
/// surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnAliases {
    pub id: Vec<String>,
    pub name: Vec<String>,
    pub latitude: Vec<String>,
    pub longitude: Vec<String>,
    pub status: Vec<String>,
    pub notes: Vec<String>,
    pub image_reference: Vec<String>,
}

fn aliases(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl Default for ColumnAliases {
    fn default() -> Self {
        Self {
            id: Vec::new(),
            name: Vec::new(),
            latitude: aliases(constants::LATITUDE_ALIASES),
            longitude: aliases(constants::LONGITUDE_ALIASES),
            status: Vec::new(),
            notes: Vec::new(),
            image_reference: aliases(constants::IMAGE_REFERENCE_ALIASES),
        }
    }
}

impl ColumnAliases {
    /// Accepted header names for a canonical column, canonical name first
    pub fn candidates(&self, canonical: &str) -> Vec<String> {
        let extra = match canonical {
            columns::ID => &self.id,
            columns::NAME => &self.name,
            columns::LATITUDE => &self.latitude,
            columns::LONGITUDE => &self.longitude,
            columns::STATUS => &self.status,
            columns::NOTES => &self.notes,
            columns::IMAGE_REFERENCE => &self.image_reference,
            _ => return vec![canonical.to_string()],
        };

        std::iter::once(canonical.to_string())
            .chain(extra.iter().cloned())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Hotspot records file, CSV or SQLite
    pub records_path: PathBuf,

    /// Table read when `records_path` is a SQLite database
    pub table: String,

    /// Directory that relative image references resolve against
    pub image_root: PathBuf,

    /// Header name variants mapped onto the canonical record shape
    pub column_aliases: ColumnAliases,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            records_path: PathBuf::from(constants::DEFAULT_RECORDS_FILE),
            table: constants::HOTSPOT_TABLE_NAME.to_string(),
            image_root: PathBuf::from(constants::DEFAULT_IMAGE_ROOT),
            column_aliases: ColumnAliases::default(),
        }
    }
}

// =============================================================================
// Detail, Export and Datasets
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailConfig {
    pub locale: Locale,

    /// Overrides the locale's "show all" selectbox label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_all_sentinel: Option<String>,
}

impl DetailConfig {
    pub fn show_all_sentinel(&self) -> &str {
        self.show_all_sentinel
            .as_deref()
            .unwrap_or_else(|| self.locale.show_all_sentinel())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Columns exported when none are requested
    pub columns: Vec<String>,

    pub format: ExportFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            columns: aliases(columns::ALL),
            format: ExportFormat::Csv,
        }
    }
}

/// An auxiliary table offered for export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub name: String,
    pub path: PathBuf,
}

// =============================================================================
// Config
// =============================================================================

/// Global configuration for the hotspot dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub map: MapSettings,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub detail: DetailConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub datasets: Vec<DatasetConfig>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file: {}", path.display()),
                e,
            )
        })?;

        let config = Self::from_toml(&content, &path.display().to_string())?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text; `origin` names the source in errors
    pub fn from_toml(content: &str, origin: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::ConfigParsing {
            file: origin.to_string(),
            source,
        })
    }

    /// Default configuration file location, e.g. `~/.config/hotspot-dashboard/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(constants::CONFIG_DIR_NAME)
                .join(constants::CONFIG_FILE_NAME)
        })
    }

    /// Load the explicit file if given, else the default location if it
    /// exists, else the built-in defaults
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        MapOptions::from_settings(&self.map)?;

        if self.export.columns.is_empty() {
            return Err(Error::configuration(
                "export.columns must name at least one column".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for dataset in &self.datasets {
            if dataset.name.trim().is_empty() {
                return Err(Error::configuration(
                    "Dataset names cannot be empty".to_string(),
                ));
            }
            if !seen.insert(dataset.name.as_str()) {
                return Err(Error::configuration(format!(
                    "Dataset '{}' is declared more than once",
                    dataset.name
                )));
            }
        }

        Ok(())
    }

    /// Create configuration with a custom records file
    pub fn with_records_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store.records_path = path.into();
        self
    }

    /// Create configuration with a custom image root
    pub fn with_image_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.store.image_root = path.into();
        self
    }

    /// Create configuration with a custom label language
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.detail.locale = locale;
        self
    }

    /// Create configuration with custom map settings
    pub fn with_map_settings(mut self, map: MapSettings) -> Self {
        self.map = map;
        self
    }

    /// Get a declared auxiliary dataset by name
    pub fn dataset(&self, name: &str) -> Option<&DatasetConfig> {
        self.datasets.iter().find(|dataset| dataset.name == name)
    }
}
