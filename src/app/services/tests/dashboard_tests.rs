//! Tests for render cycle orchestration

use super::*;
use crate::Error;
use crate::app::models::SelectionKey;
use crate::app::services::dashboard::Dashboard;
use crate::app::services::detail_formatter::{DetailView, Locale};
use crate::app::services::map_projector::MapOptions;
use crate::config::Config;

fn dashboard(locale: Locale) -> Dashboard {
    Dashboard::new(MapOptions::from_settings(&scenario_settings()).unwrap(), locale)
}

#[test]
fn test_render_show_all() {
    let records = sample_records();

    let cycle = dashboard(Locale::English)
        .render(&records, &SelectionKey::ShowAll)
        .unwrap();

    assert_eq!(cycle.selection, SelectionKey::ShowAll);
    assert_eq!(cycle.detail, DetailView::Empty);
    assert_eq!(cycle.map.descriptor.zoom, 13);
    assert_eq!(cycle.map.descriptor.markers.len(), 2);
}

#[test]
fn test_render_selected_hotspot() {
    let records = sample_records();

    let cycle = dashboard(Locale::Malay)
        .render(&records, &SelectionKey::by_name("Site B"))
        .unwrap();

    let highlighted = cycle.map.descriptor.highlighted_marker().unwrap();
    assert_eq!(highlighted.tooltip, "Site B");
    assert_eq!(cycle.detail.value_of("Nama"), Some("Site B"));
    assert_eq!(cycle.detail.value_of("Status"), Some("cleared"));
}

#[test]
fn test_render_unknown_selection_fails() {
    let records = sample_records();

    let result = dashboard(Locale::English).render(&records, &SelectionKey::by_name("Nowhere"));
    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[test]
fn test_render_cycle_is_pure() {
    let records = sample_records();
    let dashboard = dashboard(Locale::English);
    let key = SelectionKey::by_id(1);

    let first = dashboard.render(&records, &key).unwrap();
    let second = dashboard.render(&records, &key).unwrap();
    assert_eq!(first, second);
    assert_eq!(records, sample_records());
}

#[test]
fn test_from_default_config() {
    let records = sample_records();

    let dashboard = Dashboard::from_config(&Config::default()).unwrap();
    let cycle = dashboard.render(&records, &SelectionKey::ShowAll).unwrap();

    assert_eq!(cycle.map.descriptor.zoom, crate::constants::DEFAULT_ZOOM);
    assert_eq!(cycle.map.descriptor.markers[0].color, "blue");
}

#[test]
fn test_render_cycle_serializes() {
    let records = sample_records();

    let cycle = dashboard(Locale::English)
        .render(&records, &SelectionKey::by_name("Site A"))
        .unwrap();
    let json = serde_json::to_value(&cycle).unwrap();

    assert_eq!(json["map"]["descriptor"]["zoom"], 17);
    assert_eq!(json["map"]["descriptor"]["markers"][0]["selected"], true);
    assert_eq!(json["detail"]["view"], "record");
}
