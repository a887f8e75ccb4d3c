//! Application constants for the hotspot dashboard
//!
//! Default values used by the configuration layer, canonical column names and
//! the content types of export payloads. The core services never read these
//! directly for map settings; they receive them through [`crate::config`].

// =============================================================================
// Map Defaults
// =============================================================================

/// Overview center (latitude, longitude) used when no hotspot is selected
pub const DEFAULT_CENTER: (f64, f64) = (2.9, 101.6);

/// Zoom level for the overview map
pub const DEFAULT_ZOOM: u8 = 13;

/// Zoom level used when a hotspot is selected
pub const DEFAULT_SELECTED_ZOOM: u8 = 17;

/// Highest zoom level accepted by web map tile providers
pub const MAX_ZOOM: u8 = 22;

/// Marker color for unselected hotspots
pub const DEFAULT_MARKER_COLOR: &str = "blue";

/// Marker color for the selected hotspot
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "green";

/// Satellite imagery tile template
pub const DEFAULT_TILE_URL: &str = "https://mt1.google.com/vt/lyrs=s&x={x}&y={y}&z={z}";

/// Attribution shown for the default tile layer
pub const DEFAULT_TILE_ATTRIBUTION: &str = "Google Earth Satellite";

// =============================================================================
// Geographic Bounds
// =============================================================================

/// Valid latitude range in WGS84 decimal degrees
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range in WGS84 decimal degrees
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

// =============================================================================
// Record Columns
// =============================================================================

/// Canonical hotspot record columns in their natural order
pub mod columns {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
    pub const STATUS: &str = "status";
    pub const NOTES: &str = "notes";
    pub const IMAGE_REFERENCE: &str = "image_reference";

    /// Synthesized 1-based index over exported rows
    pub const ROW_NUMBER: &str = "row_number";

    /// All canonical columns of a hotspot record
    pub const ALL: &[&str] = &[ID, NAME, LATITUDE, LONGITUDE, STATUS, NOTES, IMAGE_REFERENCE];
}

/// Source header aliases accepted for the image reference column
pub const IMAGE_REFERENCE_ALIASES: &[&str] = &["image_file", "image_link"];

/// Source header aliases accepted for the latitude column
pub const LATITUDE_ALIASES: &[&str] = &["lat"];

/// Source header aliases accepted for the longitude column
pub const LONGITUDE_ALIASES: &[&str] = &["lon", "lng"];

/// Table name used for exports of the hotspot collection
pub const HOTSPOT_TABLE_NAME: &str = "hotspots";

/// Default directory that relative image references resolve against
pub const DEFAULT_IMAGE_ROOT: &str = "Images";

/// Default hotspot records file
pub const DEFAULT_RECORDS_FILE: &str = "hotspots.csv";

/// File extensions read as SQLite databases rather than CSV
pub const SQLITE_EXTENSIONS: &[&str] = &["db", "sqlite", "sqlite3"];

// =============================================================================
// Selection
// =============================================================================

/// Selectbox label meaning "show every hotspot" in the English dashboard
pub const SHOW_ALL_SENTINEL: &str = "All";

/// Selectbox label meaning "show every hotspot" in the Malay dashboard
pub const SHOW_ALL_SENTINEL_MALAY: &str = "Semua";

// =============================================================================
// Export
// =============================================================================

/// Content type of CSV exports
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Content type of XLSX exports
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Excel limits worksheet names to 31 characters
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Fixed workbook creation date (year, month, day) so exports are reproducible
pub const WORKBOOK_CREATION_DATE: (u16, u8, u8) = (2000, 1, 1);

// =============================================================================
// Configuration
// =============================================================================

/// Application directory name under the user configuration directory
pub const CONFIG_DIR_NAME: &str = "hotspot-dashboard";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";
