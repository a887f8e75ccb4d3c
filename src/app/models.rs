//! Data models for hotspot dashboards
//!
//! This module contains the core data structures: the canonical hotspot record
//! shape every data source is normalized onto, coordinate handling, the
//! selection key sum type and the non-fatal data quality warning.

use crate::constants::{LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Record Identifier
// =============================================================================

/// Identifier assigned to a hotspot by the record store
///
/// Sources either carry integer keys (an SQL rowid) or opaque text keys, so
/// both are accepted. Numeric and textual ids never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Numeric(i64),
    Text(String),
}

impl RecordId {
    /// Parse a raw id cell, preferring the numeric form
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(value) => RecordId::Numeric(value),
            Err(_) => RecordId::Text(trimmed.to_string()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Numeric(value) => write!(f, "{}", value),
            RecordId::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Numeric(value)
    }
}

impl From<i32> for RecordId {
    fn from(value: i32) -> Self {
        RecordId::Numeric(i64::from(value))
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId::Text(value)
    }
}

// =============================================================================
// Coordinates
// =============================================================================

/// WGS84 coordinate pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check both components lie within geographic bounds
    ///
    /// NaN is never valid.
    pub fn is_valid(&self) -> bool {
        LATITUDE_RANGE.contains(&self.latitude) && LONGITUDE_RANGE.contains(&self.longitude)
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

// =============================================================================
// Hotspot Record
// =============================================================================

/// One reported dumping site
///
/// Records are loaded wholesale by the record store and treated as an
/// immutable snapshot for the duration of a render cycle. Out-of-range
/// coordinates are allowed here; they are a data quality issue reported by
/// the map projector rather than a construction failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotspotRecord {
    /// Store-assigned identifier
    pub id: RecordId,

    /// Display label, also the default selection key
    pub name: String,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// Free-text classification (e.g. "active", "cleared")
    #[serde(default)]
    pub status: String,

    /// Free-text notes, may be empty
    #[serde(default)]
    pub notes: String,

    /// Relative image filename or absolute URL
    #[serde(default)]
    pub image_reference: String,
}

impl HotspotRecord {
    /// Create a new record with validation
    ///
    /// Status, notes and image reference start empty; use the `with_*`
    /// methods to fill them in.
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self> {
        let record = Self {
            id: id.into(),
            name: name.into(),
            latitude,
            longitude,
            status: String::new(),
            notes: String::new(),
            image_reference: String::new(),
        };

        record.validate()?;
        Ok(record)
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_image_reference(mut self, image_reference: impl Into<String>) -> Self {
        self.image_reference = image_reference.into();
        self
    }

    /// Validate required fields
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::data_validation(format!(
                "Hotspot {} has an empty name",
                self.id
            )));
        }

        Ok(())
    }

    /// Get record location as a coordinate pair
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Check whether the record can be placed on a map
    pub fn has_valid_coordinates(&self) -> bool {
        self.coordinates().is_valid()
    }

    /// Check whether this record is identified by the given key
    ///
    /// `ShowAll` matches nothing: it selects no individual record.
    pub fn matches(&self, key: &SelectionKey) -> bool {
        match key {
            SelectionKey::ShowAll => false,
            SelectionKey::ByName(name) => self.name == *name,
            SelectionKey::ById(id) => self.id == *id,
        }
    }
}

// =============================================================================
// Selection Key
// =============================================================================

/// User-supplied selection, resolved against the current record collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionKey {
    /// Aggregate view, nothing selected
    #[default]
    ShowAll,
    /// Exact match on the record name
    ByName(String),
    /// Exact match on the record id
    ById(RecordId),
}

impl SelectionKey {
    pub fn by_name(name: impl Into<String>) -> Self {
        SelectionKey::ByName(name.into())
    }

    pub fn by_id(id: impl Into<RecordId>) -> Self {
        SelectionKey::ById(id.into())
    }

    /// Interpret a raw selectbox value
    ///
    /// The show-all sentinel label and blank input mean no selection; any
    /// other value is taken verbatim as a name key.
    pub fn parse(raw: Option<&str>, show_all_sentinel: &str) -> Self {
        match raw {
            None => SelectionKey::ShowAll,
            Some(value) if value.trim().is_empty() || value == show_all_sentinel => {
                SelectionKey::ShowAll
            }
            Some(value) => SelectionKey::ByName(value.to_string()),
        }
    }

    pub fn is_show_all(&self) -> bool {
        matches!(self, SelectionKey::ShowAll)
    }

    /// The key as the caller supplied it, without the `id=` prefix of `Display`
    pub fn key_label(&self) -> String {
        match self {
            SelectionKey::ShowAll => "<all>".to_string(),
            SelectionKey::ByName(name) => name.clone(),
            SelectionKey::ById(id) => id.to_string(),
        }
    }
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionKey::ShowAll => f.write_str("<all>"),
            SelectionKey::ByName(name) => f.write_str(name),
            SelectionKey::ById(id) => write!(f, "id={}", id),
        }
    }
}

// =============================================================================
// Data Quality Warning
// =============================================================================

/// Non-fatal report about a record that could not be rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataQualityWarning {
    pub record_id: RecordId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl DataQualityWarning {
    pub fn out_of_range(record: &HotspotRecord) -> Self {
        Self {
            record_id: record.id.clone(),
            name: record.name.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}

impl fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hotspot '{}' (id {}) has out-of-range coordinates ({}, {})",
            self.name, self.record_id, self.latitude, self.longitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_parse_prefers_numeric() {
        assert_eq!(RecordId::parse(" 42 "), RecordId::Numeric(42));
        assert_eq!(RecordId::parse("HS-7"), RecordId::Text("HS-7".to_string()));
        assert_ne!(RecordId::parse("7"), RecordId::from("7"));
    }

    #[test]
    fn test_coordinates_bounds() {
        assert!(Coordinates::new(90.0, 180.0).is_valid());
        assert!(Coordinates::new(-90.0, -180.0).is_valid());
        assert!(!Coordinates::new(91.0, 101.6).is_valid());
        assert!(!Coordinates::new(2.9, -180.5).is_valid());
        assert!(!Coordinates::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_record_rejects_empty_name() {
        let result = HotspotRecord::new(1, "   ", 2.9, 101.6);
        assert!(matches!(result, Err(Error::DataValidation { .. })));
    }

    #[test]
    fn test_record_allows_out_of_range_coordinates() {
        let record = HotspotRecord::new(1, "Far North", 91.0, 101.6).unwrap();
        assert!(!record.has_valid_coordinates());
    }

    #[test]
    fn test_selection_key_parse() {
        assert_eq!(SelectionKey::parse(None, "All"), SelectionKey::ShowAll);
        assert_eq!(SelectionKey::parse(Some("All"), "All"), SelectionKey::ShowAll);
        assert_eq!(SelectionKey::parse(Some("  "), "All"), SelectionKey::ShowAll);
        assert_eq!(
            SelectionKey::parse(Some("Site A"), "All"),
            SelectionKey::by_name("Site A")
        );
        // The sentinel is language specific
        assert_eq!(
            SelectionKey::parse(Some("All"), "Semua"),
            SelectionKey::by_name("All")
        );
    }

    #[test]
    fn test_record_matches_key() {
        let record = HotspotRecord::new(3, "Site A", 2.9, 101.6).unwrap();
        assert!(record.matches(&SelectionKey::by_name("Site A")));
        assert!(!record.matches(&SelectionKey::by_name("site a")));
        assert!(record.matches(&SelectionKey::by_id(3)));
        assert!(!record.matches(&SelectionKey::ShowAll));
    }
}
