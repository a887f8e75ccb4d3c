//! Hotspot record loading
//!
//! Reads hotspot tables from CSV or SQLite and maps whatever header names the source
//! uses onto the canonical [`HotspotRecord`] shape. This is the only place
//! that knows about column-name variants such as `image_file` versus
//! `image_link`; everything downstream sees canonical records.

use crate::app::models::{HotspotRecord, RecordId};
use crate::config::{ColumnAliases, StoreConfig};
use crate::constants::{SQLITE_EXTENSIONS, columns};
use crate::{Error, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Positions of the canonical columns in a source header row
#[derive(Debug, Clone, PartialEq)]
struct HeaderLayout {
    id: Option<usize>,
    name: usize,
    latitude: usize,
    longitude: usize,
    status: Option<usize>,
    notes: Option<usize>,
    image_reference: Option<usize>,
}

impl HeaderLayout {
    fn from_headers(headers: &StringRecord, aliases: &ColumnAliases) -> Result<Self> {
        let header_names: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();

        let find = |canonical: &str| -> Option<usize> {
            aliases.candidates(canonical).iter().find_map(|candidate| {
                header_names
                    .iter()
                    .position(|header| header.eq_ignore_ascii_case(candidate))
            })
        };
        let require = |canonical: &str| -> Result<usize> {
            find(canonical).ok_or_else(|| Error::schema(canonical, &header_names))
        };

        Ok(Self {
            id: find(columns::ID),
            name: require(columns::NAME)?,
            latitude: require(columns::LATITUDE)?,
            longitude: require(columns::LONGITUDE)?,
            status: find(columns::STATUS),
            notes: find(columns::NOTES),
            image_reference: find(columns::IMAGE_REFERENCE),
        })
    }
}

/// Loads hotspot records, normalizing source columns
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    aliases: ColumnAliases,
}

impl RecordStore {
    pub fn new(aliases: ColumnAliases) -> Self {
        Self { aliases }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.column_aliases.clone())
    }

    /// Load records from the configured source
    ///
    /// SQLite files (`.db`, `.sqlite`, `.sqlite3`) are read from the
    /// configured table; anything else is read as CSV.
    pub fn load(&self, config: &StoreConfig) -> Result<Vec<HotspotRecord>> {
        let path = &config.records_path;
        if is_sqlite_path(path) {
            self.load_sqlite(path, &config.table)
        } else {
            self.load_csv(path)
        }
    }

    /// Load records from a CSV file
    pub fn load_csv(&self, path: &Path) -> Result<Vec<HotspotRecord>> {
        let file = File::open(path).map_err(|e| {
            Error::io(
                format!("Failed to open records file: {}", path.display()),
                e,
            )
        })?;

        let records = self.read_csv(file, &path.display().to_string())?;
        info!("Loaded {} hotspots from {}", records.len(), path.display());
        Ok(records)
    }

    /// Read records from any CSV source; `origin` names it in errors
    ///
    /// Rows without an id column get their 1-based row number as id.
    pub fn read_csv<R: Read>(&self, reader: R, origin: &str) -> Result<Vec<HotspotRecord>> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::Headers)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| Error::csv_parsing(origin, "Failed to read header row", Some(e)))?
            .clone();
        let layout = HeaderLayout::from_headers(&headers, &self.aliases)?;
        debug!("Header layout for {}: {:?}", origin, layout);

        let rows = csv_reader.records().enumerate().map(|(index, row)| {
            row.map_err(|e| {
                Error::csv_parsing(origin, format!("Failed to read row {}", index + 1), Some(e))
            })
        });

        build_records(rows, &layout, origin)
    }

    /// Load every row of `table` from a SQLite database
    ///
    /// Column values are converted to text and go through the same header
    /// normalization as CSV input. NULL reads as an empty field.
    pub fn load_sqlite(&self, path: &Path, table: &str) -> Result<Vec<HotspotRecord>> {
        let origin = format!("{}:{}", path.display(), table);

        let connection = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|e| {
                Error::database(format!("Failed to open database {}", path.display()), e)
            })?;

        let query = format!("SELECT * FROM {}", quote_identifier(table));
        let mut statement = connection
            .prepare(&query)
            .map_err(|e| Error::database(format!("Failed to query table '{}'", table), e))?;

        let headers: StringRecord = statement.column_names().into_iter().collect();
        let layout = HeaderLayout::from_headers(&headers, &self.aliases)?;
        debug!("Header layout for {}: {:?}", origin, layout);

        let width = headers.len();
        let mut rows = statement
            .query([])
            .map_err(|e| Error::database(format!("Failed to query table '{}'", table), e))?;

        let mut string_rows = Vec::new();
        let mut row_number: usize = 0;
        while let Some(row) = rows
            .next()
            .map_err(|e| Error::database(format!("Failed to read rows of '{}'", table), e))?
        {
            row_number += 1;
            let mut record = StringRecord::with_capacity(0, width);
            for index in 0..width {
                let value = row.get_ref(index).map_err(|e| {
                    Error::database(format!("Failed to read row {} of '{}'", row_number, table), e)
                })?;
                let text = sql_text(value).map_err(|e| {
                    Error::data_validation(format!(
                        "{} row {}: column '{}' {}",
                        origin,
                        row_number,
                        headers.get(index).unwrap_or(""),
                        e
                    ))
                })?;
                record.push_field(&text);
            }
            string_rows.push(Ok(record));
        }

        let records = build_records(string_rows, &layout, &origin)?;
        info!("Loaded {} hotspots from {}", records.len(), origin);
        Ok(records)
    }
}

/// Turn raw rows into records, numbering rows from 1
fn build_records<I>(rows: I, layout: &HeaderLayout, origin: &str) -> Result<Vec<HotspotRecord>>
where
    I: IntoIterator<Item = Result<StringRecord>>,
{
    let mut records = Vec::new();
    let mut seen_names = HashSet::new();

    for (index, row) in rows.into_iter().enumerate() {
        let row_number = index + 1;
        let row = row?;

        let record = parse_row(&row, layout, row_number)
            .map_err(|e| Error::data_validation(format!("{} row {}: {}", origin, row_number, e)))?;

        if !seen_names.insert(record.name.clone()) {
            warn!(
                "Duplicate hotspot name '{}' in {} row {}; selection by name resolves to the first",
                record.name, origin, row_number
            );
        }

        records.push(record);
    }

    Ok(records)
}

fn is_sqlite_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SQLITE_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn sql_text(value: ValueRef<'_>) -> std::result::Result<String, String> {
    match value {
        ValueRef::Null => Ok(String::new()),
        ValueRef::Integer(value) => Ok(value.to_string()),
        ValueRef::Real(value) => Ok(value.to_string()),
        ValueRef::Text(bytes) => Ok(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(_) => Err("holds binary data".to_string()),
    }
}

fn field<'r>(row: &'r StringRecord, index: Option<usize>) -> &'r str {
    index.and_then(|i| row.get(i)).unwrap_or("")
}

fn parse_coordinate(row: &StringRecord, index: usize, column: &str) -> std::result::Result<f64, String> {
    let raw = field(row, Some(index)).trim();
    raw.parse::<f64>()
        .map_err(|_| format!("{} '{}' is not a number", column, raw))
}

fn parse_row(
    row: &StringRecord,
    layout: &HeaderLayout,
    row_number: usize,
) -> std::result::Result<HotspotRecord, String> {
    let id = match layout.id {
        Some(_) if !field(row, layout.id).trim().is_empty() => RecordId::parse(field(row, layout.id)),
        _ => RecordId::Numeric(row_number as i64),
    };

    let name = field(row, Some(layout.name)).trim();
    if name.is_empty() {
        return Err("name is empty".to_string());
    }

    let latitude = parse_coordinate(row, layout.latitude, columns::LATITUDE)?;
    let longitude = parse_coordinate(row, layout.longitude, columns::LONGITUDE)?;

    let record = HotspotRecord::new(id, name, latitude, longitude)
        .map_err(|e| e.to_string())?
        .with_status(field(row, layout.status))
        .with_notes(field(row, layout.notes))
        .with_image_reference(field(row, layout.image_reference).trim());

    Ok(record)
}
