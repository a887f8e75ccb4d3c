//! End-to-end tests of the dashboard pipeline through the public API
//!
//! Each test writes a record file and configuration into a temporary
//! directory, then loads, renders and exports them the way the CLI does.

use hotspot_dashboard::app::adapters::auxiliary::DatasetCatalog;
use hotspot_dashboard::app::adapters::images::{ImageHandle, ImageResolver};
use hotspot_dashboard::app::adapters::record_store::RecordStore;
use hotspot_dashboard::app::services::dashboard::Dashboard;
use hotspot_dashboard::app::services::table_exporter::{self, ExportFormat, TableSource};
use hotspot_dashboard::{Config, Error, SelectionKey};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const RECORDS_CSV: &str = "\
Name,Lat,Lng,Status,Notes,Image_File
Site A,3.0,101.7,active,\"bins, bags\",a.jpg
Site B,3.1,101.8,cleared,,b.jpg
Site C,91.0,101.0,active,bad gps,
";

fn write_fixture(dir: &Path) -> Config {
    fs::write(dir.join("hotspots.csv"), RECORDS_CSV).unwrap();
    fs::create_dir_all(dir.join("Images")).unwrap();
    fs::write(dir.join("Images").join("a.jpg"), b"jpeg").unwrap();
    fs::write(
        dir.join("collections.csv"),
        "zone,tonnes\nNorth,12.5\nSouth,8\n",
    )
    .unwrap();

    let config_toml = format!(
        r#"
[map]
default_center = [2.9, 101.6]
default_zoom = 13
selected_zoom = 17

[map.color_scheme]
default = "blue"
highlight = "green"

[store]
records_path = "{records}"
image_root = "{images}"

[detail]
locale = "malay"

[export]
columns = ["row_number", "name", "status"]
format = "csv"

[[datasets]]
name = "collections"
path = "{collections}"
"#,
        records = dir.join("hotspots.csv").display(),
        images = dir.join("Images").display(),
        collections = dir.join("collections.csv").display(),
    );
    let config_path = dir.join("config.toml");
    fs::write(&config_path, config_toml).unwrap();

    let config = Config::load_from_file(&config_path).unwrap();
    config.validate().unwrap();
    config
}

#[test]
fn test_render_cycle_from_files() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_fixture(temp_dir.path());

    let records = RecordStore::from_config(&config.store)
        .load_csv(&config.store.records_path)
        .unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].notes, "bins, bags");

    let dashboard = Dashboard::from_config(&config).unwrap();
    let key = SelectionKey::parse(Some("Site A"), config.detail.show_all_sentinel());
    let cycle = dashboard.render(&records, &key).unwrap();

    let descriptor = &cycle.map.descriptor;
    assert_eq!(descriptor.markers.len(), 2);
    assert_eq!(descriptor.zoom, 17);
    assert_eq!(descriptor.highlighted_marker().unwrap().tooltip, "Site A");
    assert_eq!(cycle.map.warnings.len(), 1);
    assert_eq!(cycle.map.warnings[0].name, "Site C");

    assert_eq!(cycle.detail.value_of("Nama"), Some("Site A"));
    assert_eq!(cycle.detail.value_of("Catatan"), Some("bins, bags"));

    let resolver = ImageResolver::new(&config.store.image_root);
    let image = resolver.resolve(&cycle.detail.detail().unwrap().image_reference);
    assert_eq!(image, ImageHandle::Local(config.store.image_root.join("a.jpg")));
    assert!(matches!(resolver.resolve("b.jpg"), ImageHandle::Missing(_)));
}

#[test]
fn test_malay_sentinel_shows_all() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_fixture(temp_dir.path());
    let records = RecordStore::from_config(&config.store)
        .load_csv(&config.store.records_path)
        .unwrap();

    let key = SelectionKey::parse(Some("Semua"), config.detail.show_all_sentinel());
    assert_eq!(key, SelectionKey::ShowAll);

    let cycle = Dashboard::from_config(&config)
        .unwrap()
        .render(&records, &key)
        .unwrap();
    assert!(cycle.detail.is_empty());
    assert_eq!(cycle.map.descriptor.zoom, 13);
}

#[test]
fn test_export_with_configured_columns() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_fixture(temp_dir.path());
    let records = RecordStore::from_config(&config.store)
        .load_csv(&config.store.records_path)
        .unwrap();

    let payload =
        table_exporter::export(records.as_slice(), &config.export.columns, config.export.format)
            .unwrap();

    assert_eq!(
        String::from_utf8(payload.serialized).unwrap(),
        "row_number,name,status\n1,Site A,active\n2,Site B,cleared\n3,Site C,active\n"
    );

    let output = temp_dir.path().join(&payload.suggested_filename);
    assert_eq!(output.file_name().unwrap(), "hotspots.csv");
}

#[test]
fn test_dataset_export_to_xlsx() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_fixture(temp_dir.path());

    let catalog = DatasetCatalog::load(&config.datasets).unwrap();
    let table = catalog.get("collections").unwrap();
    assert_eq!(table.row_count(), 2);

    let payload =
        table_exporter::export(table, &table.column_names(), ExportFormat::Xlsx).unwrap();
    let path = temp_dir.path().join(&payload.suggested_filename);
    fs::write(&path, &payload.serialized).unwrap();

    assert_eq!(payload.suggested_filename, "collections.xlsx");
    assert!(fs::read(&path).unwrap().starts_with(b"PK"));

    assert!(matches!(catalog.get("missing"), Err(Error::NotFound { .. })));
}

#[test]
fn test_partial_map_section_is_rejected() {
    let config = Config::from_toml("[map]\ndefault_zoom = 13\n", "inline").unwrap();

    let result = config.validate();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_missing_required_column_is_schema_error() {
    let csv = "name,latitude\nSite A,3.0\n";

    let result = RecordStore::default().read_csv(csv.as_bytes(), "inline");
    match result {
        Err(Error::Schema { column, .. }) => assert_eq!(column, "longitude"),
        other => panic!("expected schema error, got {:?}", other),
    }
}
