//! Tests for map projection

use super::*;
use crate::Error;
use crate::app::models::{Coordinates, SelectionKey};
use crate::app::services::map_projector::{self, MapOptions, MapProjector, popup_html};
use crate::app::services::selection_resolver::{SelectedRecord, SelectedState, resolve};
use crate::config::ColorSchemeSettings;

fn projector() -> MapProjector {
    MapProjector::from_settings(&scenario_settings()).unwrap()
}

#[test]
fn test_overview_without_selection() {
    let records = sample_records();

    let projection = projector().project(&records, &SelectedState::none()).unwrap();
    let descriptor = &projection.descriptor;

    assert_eq!(descriptor.center, Coordinates::new(2.9, 101.6));
    assert_eq!(descriptor.zoom, 13);
    assert_eq!(descriptor.markers.len(), 2);
    assert!(descriptor.markers.iter().all(|marker| marker.color == "blue"));
    assert!(descriptor.highlighted_marker().is_none());
    assert!(projection.warnings.is_empty());
}

#[test]
fn test_selection_centers_and_highlights() {
    let records = sample_records();
    let selected = resolve(&records, &SelectionKey::by_name("Site B")).unwrap();

    let projection = projector().project(&records, &selected).unwrap();
    let descriptor = &projection.descriptor;

    assert_eq!(descriptor.center, Coordinates::new(3.1, 101.8));
    assert_eq!(descriptor.zoom, 17);

    let highlighted: Vec<_> = descriptor.markers.iter().filter(|m| m.selected).collect();
    assert_eq!(highlighted.len(), 1);
    assert_eq!(highlighted[0].tooltip, "Site B");
    assert_eq!(highlighted[0].color, "green");
    assert_eq!(descriptor.markers[0].color, "blue");
    assert_eq!(
        highlighted[0].popup.as_str(),
        "<b>Site B</b><br><i>cleared</i>"
    );
}

#[test]
fn test_markers_follow_record_order() {
    let records = sample_records();

    let projection = projector().project(&records, &SelectedState::none()).unwrap();
    let tooltips: Vec<&str> = projection
        .descriptor
        .markers
        .iter()
        .map(|marker| marker.tooltip.as_str())
        .collect();

    assert_eq!(tooltips, vec!["Site A", "Site B"]);
    assert_eq!(projection.descriptor.markers[0].record_id, records[0].id);
}

#[test]
fn test_out_of_range_record_is_skipped_with_warning() {
    let mut records = sample_records();
    records.push(HotspotRecord::new(3, "Site C", 91.0, 101.0).unwrap());

    let projection = projector().project(&records, &SelectedState::none()).unwrap();

    assert_eq!(projection.descriptor.markers.len(), 2);
    assert_eq!(projection.warnings.len(), 1);
    assert_eq!(projection.warnings[0].name, "Site C");
    assert_eq!(projection.warnings[0].latitude, 91.0);
}

#[test]
fn test_nan_coordinates_are_skipped() {
    let records = vec![
        site_a(),
        HotspotRecord::new(4, "Site D", f64::NAN, 101.0).unwrap(),
    ];

    let projection = projector().project(&records, &SelectedState::none()).unwrap();

    assert_eq!(projection.descriptor.markers.len(), 1);
    assert_eq!(projection.warnings.len(), 1);
}

#[test]
fn test_selected_record_with_invalid_coordinates_falls_back_to_overview() {
    let records = vec![
        site_a(),
        HotspotRecord::new(3, "Site C", 91.0, 101.0).unwrap(),
    ];
    let selected = resolve(&records, &SelectionKey::by_name("Site C")).unwrap();

    let projection = projector().project(&records, &selected).unwrap();

    assert_eq!(projection.descriptor.center, Coordinates::new(2.9, 101.6));
    assert_eq!(projection.descriptor.zoom, 13);
    assert!(projection.descriptor.highlighted_marker().is_none());
    assert_eq!(projection.warnings.len(), 1);
}

#[test]
fn test_duplicate_names_highlight_only_resolved_record() {
    let records = vec![
        site_a(),
        HotspotRecord::new(3, "Site A", 3.2, 101.9).unwrap(),
    ];
    let selected = resolve(&records, &SelectionKey::by_name("Site A")).unwrap();

    let projection = projector().project(&records, &selected).unwrap();
    let markers = &projection.descriptor.markers;

    assert!(markers[0].selected);
    assert!(!markers[1].selected);
    assert_eq!(projection.descriptor.center, Coordinates::new(3.0, 101.7));
}

#[test]
fn test_selection_from_another_collection_is_rejected() {
    let records = sample_records();
    let other = sample_records();
    let foreign = SelectedState {
        active: Some(SelectedRecord {
            index: 0,
            record: &other[0],
        }),
    };

    let result = projector().project(&records, &foreign);
    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[test]
fn test_empty_collection_projects_overview() {
    let records: Vec<HotspotRecord> = Vec::new();

    let projection = projector().project(&records, &SelectedState::none()).unwrap();

    assert!(projection.descriptor.markers.is_empty());
    assert_eq!(projection.descriptor.zoom, 13);
}

#[test]
fn test_popup_escapes_markup() {
    let record = HotspotRecord::new(9, "<script>alert(1)</script>", 3.0, 101.0)
        .unwrap()
        .with_status("a & b")
        .with_notes("\"quoted\" 'single'");

    let popup = popup_html(&record);

    assert_eq!(
        popup.as_str(),
        "<b>&lt;script&gt;alert(1)&lt;/script&gt;</b><br><i>a &amp; b</i><br>&quot;quoted&quot; &#39;single&#39;"
    );
}

#[test]
fn test_popup_includes_notes() {
    let popup = popup_html(&site_a());
    assert_eq!(popup.as_str(), "<b>Site A</b><br><i>active</i><br>near drain");
}

#[test]
fn test_tile_source_passes_through() {
    let records = sample_records();

    let projection = map_projector::project(&records, &SelectedState::none(), &scenario_settings())
        .unwrap();

    assert_eq!(
        projection.descriptor.tile_source.url_template,
        "https://tiles.example/{z}/{x}/{y}.png"
    );
    assert_eq!(projection.descriptor.tile_source.attribution, "Example Tiles");
}

#[test]
fn test_missing_option_is_configuration_error() {
    let mut settings = scenario_settings();
    settings.selected_zoom = None;

    let result = MapOptions::from_settings(&settings);
    match result {
        Err(Error::Configuration { message }) => assert!(message.contains("map.selected_zoom")),
        other => panic!("expected configuration error, got {:?}", other),
    }

    let mut settings = scenario_settings();
    settings.color_scheme = None;
    assert!(MapOptions::from_settings(&settings).is_err());
}

#[test]
fn test_invalid_options_rejected() {
    let mut settings = scenario_settings();
    settings.default_center = Some((120.0, 101.6));
    assert!(MapOptions::from_settings(&settings).is_err());

    let mut settings = scenario_settings();
    settings.default_zoom = Some(30);
    assert!(MapOptions::from_settings(&settings).is_err());

    let mut settings = scenario_settings();
    if let Some(colors) = settings.color_scheme.as_mut() {
        colors.highlight = Some("  ".to_string());
    }
    assert!(MapOptions::from_settings(&settings).is_err());
}

#[test]
fn test_projection_is_deterministic() {
    let records = sample_records();
    let selected = resolve(&records, &SelectionKey::by_id(2)).unwrap();
    let projector = projector();

    let first = projector.project(&records, &selected).unwrap();
    let second = projector.project(&records, &selected).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_identical_marker_colors_rejected() {
    let mut settings = scenario_settings();
    settings.color_scheme = Some(ColorSchemeSettings {
        default: Some("green".to_string()),
        highlight: Some("Green".to_string()),
    });

    match MapOptions::from_settings(&settings) {
        Err(Error::Configuration { message }) => {
            assert!(message.contains("map.color_scheme.highlight"))
        }
        other => panic!("expected configuration error, got {:?}", other),
    }
}

#[test]
fn test_dashboard_scenario_coordinates() {
    let records = vec![
        HotspotRecord::new(1, "Site A", 2.9, 101.6)
            .unwrap()
            .with_status("active"),
        HotspotRecord::new(2, "Site B", 2.95, 101.65)
            .unwrap()
            .with_status("cleared"),
    ];

    let overview = projector().project(&records, &SelectedState::none()).unwrap();
    assert_eq!(overview.descriptor.center, Coordinates::new(2.9, 101.6));
    assert_eq!(overview.descriptor.zoom, 13);
    assert_eq!(overview.descriptor.markers[0].position, overview.descriptor.center);
    assert!(
        overview
            .descriptor
            .markers
            .iter()
            .all(|marker| marker.color == "blue" && !marker.selected)
    );

    let selected = resolve(&records, &SelectionKey::by_name("Site B")).unwrap();
    let projection = projector().project(&records, &selected).unwrap();
    let descriptor = &projection.descriptor;

    assert_eq!(descriptor.center, Coordinates::new(2.95, 101.65));
    assert_eq!(descriptor.zoom, 17);
    let colors: Vec<&str> = descriptor.markers.iter().map(|m| m.color.as_str()).collect();
    assert_eq!(colors, vec!["blue", "green"]);
    assert_eq!(
        descriptor.markers.iter().filter(|m| m.color == "green").count(),
        1
    );
    assert_eq!(
        descriptor.markers[1].popup.as_str(),
        "<b>Site B</b><br><i>cleared</i>"
    );
}
