//! Map projection for hotspot collections
//!
//! Converts a record collection and the active selection into a
//! [`MapDescriptor`] that a tile rendering backend can draw directly.
//!
//! # Projection Rules
//!
//! - Without a selection the map shows the configured overview center and
//!   zoom; with one it centers on the selected hotspot at the close-in zoom
//! - Every record with valid coordinates becomes exactly one marker, in the
//!   collection's iteration order
//! - Records with out-of-range coordinates are skipped and reported as
//!   [`DataQualityWarning`]s instead of failing the projection
//! - Only the selected record's marker carries the highlight color
//! - Popup text is built with [`markup::MarkupFragment`], so every field
//!   value is HTML-escaped

pub mod markup;

use crate::app::models::{Coordinates, DataQualityWarning, HotspotRecord, RecordId};
use crate::app::services::selection_resolver::SelectedState;
use crate::config::MapSettings;
use crate::constants::MAX_ZOOM;
use crate::{Error, Result};
use markup::{MarkupFragment, SafeHtml};
use serde::Serialize;
use tracing::{debug, warn};

// =============================================================================
// Options
// =============================================================================

/// Marker colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
    pub default: String,
    pub highlight: String,
}

/// Tile layer the map is drawn on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileSource {
    pub url_template: String,
    pub attribution: String,
}

/// Validated projection options
///
/// Every field is required; the projector applies no implicit defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapOptions {
    pub default_center: Coordinates,
    pub default_zoom: u8,
    pub selected_zoom: u8,
    pub color_scheme: ColorScheme,
    pub tile_source: TileSource,
}

impl MapOptions {
    /// Build options from configuration, failing on missing or unusable fields
    pub fn from_settings(settings: &MapSettings) -> Result<Self> {
        let default_center: Coordinates =
            require(settings.default_center, "map.default_center")?.into();
        if !default_center.is_valid() {
            return Err(Error::configuration(format!(
                "map.default_center {} is outside geographic bounds",
                default_center
            )));
        }

        let default_zoom = require_zoom(settings.default_zoom, "map.default_zoom")?;
        let selected_zoom = require_zoom(settings.selected_zoom, "map.selected_zoom")?;

        if selected_zoom < default_zoom {
            warn!(
                "map.selected_zoom ({}) is shallower than map.default_zoom ({}); selecting a hotspot will zoom out",
                selected_zoom, default_zoom
            );
        }

        let colors = settings
            .color_scheme
            .as_ref()
            .ok_or_else(|| missing("map.color_scheme"))?;
        let color_scheme = ColorScheme {
            default: require_text(colors.default.as_deref(), "map.color_scheme.default")?,
            highlight: require_text(colors.highlight.as_deref(), "map.color_scheme.highlight")?,
        };
        if color_scheme.default.eq_ignore_ascii_case(&color_scheme.highlight) {
            return Err(Error::configuration(format!(
                "map.color_scheme.highlight must differ from map.color_scheme.default (both '{}')",
                color_scheme.default
            )));
        }

        let tiles = settings
            .tile_source
            .as_ref()
            .ok_or_else(|| missing("map.tile_source"))?;
        let tile_source = TileSource {
            url_template: require_text(tiles.url_template.as_deref(), "map.tile_source.url_template")?,
            attribution: tiles.attribution.clone().unwrap_or_default(),
        };

        Ok(Self {
            default_center,
            default_zoom,
            selected_zoom,
            color_scheme,
            tile_source,
        })
    }
}

fn missing(field: &str) -> Error {
    Error::configuration(format!("missing required field {}", field))
}

fn require<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| missing(field))
}

fn require_zoom(value: Option<u8>, field: &str) -> Result<u8> {
    let zoom = require(value, field)?;
    if zoom > MAX_ZOOM {
        return Err(Error::configuration(format!(
            "{} {} exceeds the maximum zoom level {}",
            field, zoom, MAX_ZOOM
        )));
    }
    Ok(zoom)
}

fn require_text(value: Option<&str>, field: &str) -> Result<String> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(missing(field)),
    }
}

// =============================================================================
// Descriptors
// =============================================================================

/// One map annotation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerDescriptor {
    pub record_id: RecordId,
    pub position: Coordinates,
    pub color: String,
    /// Plain text, the record name
    pub tooltip: String,
    pub popup: SafeHtml,
    pub selected: bool,
}

/// Everything a rendering backend needs to draw the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapDescriptor {
    pub center: Coordinates,
    pub zoom: u8,
    pub tile_source: TileSource,
    pub markers: Vec<MarkerDescriptor>,
}

impl MapDescriptor {
    /// Get the highlighted marker, if any
    pub fn highlighted_marker(&self) -> Option<&MarkerDescriptor> {
        self.markers.iter().find(|marker| marker.selected)
    }
}

/// A map descriptor plus the records that could not be placed on it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapProjection {
    pub descriptor: MapDescriptor,
    pub warnings: Vec<DataQualityWarning>,
}

// =============================================================================
// Projector
// =============================================================================

/// Stateless projector bound to a set of validated options
#[derive(Debug, Clone)]
pub struct MapProjector {
    options: MapOptions,
}

impl MapProjector {
    pub fn new(options: MapOptions) -> Self {
        Self { options }
    }

    pub fn from_settings(settings: &MapSettings) -> Result<Self> {
        Ok(Self::new(MapOptions::from_settings(settings)?))
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    /// Project records and the active selection onto a map descriptor
    ///
    /// Fails only when `selected` was resolved against a different collection.
    pub fn project(
        &self,
        records: &[HotspotRecord],
        selected: &SelectedState<'_>,
    ) -> Result<MapProjection> {
        if let Some(active) = selected.active {
            let belongs = records
                .get(active.index)
                .is_some_and(|record| std::ptr::eq(record, active.record));
            if !belongs {
                return Err(Error::not_found(active.record.name.clone()));
            }
        }

        let selected_index = selected.index();
        let mut markers = Vec::with_capacity(records.len());
        let mut warnings = Vec::new();

        for (index, record) in records.iter().enumerate() {
            if !record.has_valid_coordinates() {
                warn!(
                    "Skipping hotspot '{}' (id {}): coordinates {} out of range",
                    record.name,
                    record.id,
                    record.coordinates()
                );
                warnings.push(DataQualityWarning::out_of_range(record));
                continue;
            }

            let is_selected = selected_index == Some(index);
            markers.push(self.marker_for(record, is_selected));
        }

        let (center, zoom) = match selected.record() {
            Some(record) if record.has_valid_coordinates() => {
                (record.coordinates(), self.options.selected_zoom)
            }
            _ => (self.options.default_center, self.options.default_zoom),
        };

        debug!(
            "Projected {} markers ({} skipped), center {} zoom {}",
            markers.len(),
            warnings.len(),
            center,
            zoom
        );

        Ok(MapProjection {
            descriptor: MapDescriptor {
                center,
                zoom,
                tile_source: self.options.tile_source.clone(),
                markers,
            },
            warnings,
        })
    }

    fn marker_for(&self, record: &HotspotRecord, is_selected: bool) -> MarkerDescriptor {
        let color = if is_selected {
            &self.options.color_scheme.highlight
        } else {
            &self.options.color_scheme.default
        };

        MarkerDescriptor {
            record_id: record.id.clone(),
            position: record.coordinates(),
            color: color.clone(),
            tooltip: record.name.clone(),
            popup: popup_html(record),
            selected: is_selected,
        }
    }
}

/// Build the popup fragment: bold name, italic status, then notes
///
/// Empty status or notes lines are left out.
pub fn popup_html(record: &HotspotRecord) -> SafeHtml {
    let mut fragment = MarkupFragment::new().strong(&record.name);
    if !record.status.is_empty() {
        fragment = fragment.emphasis(&record.status);
    }
    if !record.notes.is_empty() {
        fragment = fragment.text(&record.notes);
    }
    fragment.build()
}

/// Validate `settings` and project in one step
pub fn project(
    records: &[HotspotRecord],
    selected: &SelectedState<'_>,
    settings: &MapSettings,
) -> Result<MapProjection> {
    MapProjector::from_settings(settings)?.project(records, selected)
}
