//! Shared fixtures for the dashboard service tests

use crate::app::models::HotspotRecord;
use crate::config::{ColorSchemeSettings, MapSettings, TileSourceSettings};

pub mod dashboard_tests;
pub mod detail_tests;
pub mod map_projector_tests;

pub fn site_a() -> HotspotRecord {
    HotspotRecord::new(1, "Site A", 3.0, 101.7)
        .unwrap()
        .with_status("active")
        .with_notes("near drain")
        .with_image_reference("a.jpg")
}

pub fn site_b() -> HotspotRecord {
    HotspotRecord::new(2, "Site B", 3.1, 101.8)
        .unwrap()
        .with_status("cleared")
        .with_image_reference("b.jpg")
}

/// Two valid hotspots in insertion order
pub fn sample_records() -> Vec<HotspotRecord> {
    vec![site_a(), site_b()]
}

/// Map settings with a distinguishable tile source
pub fn scenario_settings() -> MapSettings {
    MapSettings {
        default_center: Some((2.9, 101.6)),
        default_zoom: Some(13),
        selected_zoom: Some(17),
        color_scheme: Some(ColorSchemeSettings {
            default: Some("blue".to_string()),
            highlight: Some("green".to_string()),
        }),
        tile_source: Some(TileSourceSettings {
            url_template: Some("https://tiles.example/{z}/{x}/{y}.png".to_string()),
            attribution: Some("Example Tiles".to_string()),
        }),
    }
}
