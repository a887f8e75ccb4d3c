//! Tests for detail view formatting

use super::*;
use crate::app::services::detail_formatter::{DetailFormatter, DetailView, Locale};

#[test]
fn test_no_selection_gives_empty_view() {
    let view = DetailFormatter::default().format(None);

    assert_eq!(view, DetailView::Empty);
    assert!(view.is_empty());
    assert!(view.detail().is_none());
}

#[test]
fn test_english_fields_in_order() {
    let record = site_b();
    let view = DetailFormatter::new(Locale::English).format(Some(&record));

    let detail = view.detail().unwrap();
    assert_eq!(detail.title, "Site B");
    assert_eq!(detail.image_reference, "b.jpg");

    let pairs: Vec<(&str, &str)> = detail
        .fields
        .iter()
        .map(|field| (field.label, field.value.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Name", "Site B"),
            ("Latitude", "3.1"),
            ("Longitude", "101.8"),
            ("Status", "cleared"),
            ("Notes", ""),
        ]
    );
}

#[test]
fn test_malay_labels() {
    let record = site_a();
    let view = DetailFormatter::new(Locale::Malay).format(Some(&record));

    assert_eq!(view.value_of("Nama"), Some("Site A"));
    assert_eq!(view.value_of("Latitud"), Some("3"));
    assert_eq!(view.value_of("Longitud"), Some("101.7"));
    assert_eq!(view.value_of("Catatan"), Some("near drain"));
    assert_eq!(view.value_of("Notes"), None);
}

#[test]
fn test_values_are_not_escaped() {
    let record = HotspotRecord::new(5, "Tom & Jerry's <dump>", 3.0, 101.0).unwrap();
    let view = DetailFormatter::default().format(Some(&record));

    assert_eq!(view.value_of("Name"), Some("Tom & Jerry's <dump>"));
}

#[test]
fn test_show_all_sentinel_per_locale() {
    assert_eq!(Locale::English.show_all_sentinel(), "All");
    assert_eq!(Locale::Malay.show_all_sentinel(), "Semua");
}
