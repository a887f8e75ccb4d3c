//! Tabular export of hotspot and auxiliary tables
//!
//! The exporter projects any [`TableSource`] onto a caller-chosen column list
//! and serializes the result as CSV or XLSX. Output is a pure function of the
//! inputs: two calls with the same table, columns and format produce
//! byte-identical payloads.
//!
//! # Column Projection
//!
//! - Columns are emitted in the requested order; duplicates are allowed
//! - An unknown column fails with [`Error::Schema`] naming it
//! - [`columns::ROW_NUMBER`] is synthesized as a 1-based index over the
//!   output rows and takes precedence over a source column of that name
//! - Row order always follows the source

pub mod csv_writer;
pub mod xlsx_writer;

use crate::app::models::HotspotRecord;
use crate::constants::{self, CSV_CONTENT_TYPE, XLSX_CONTENT_TYPE, columns};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

// =============================================================================
// Cells and Sources
// =============================================================================

/// A single table cell
///
/// Numbers keep their type so spreadsheets receive numeric cells; CSV uses
/// the `Display` form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Number(f64),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => f.write_str(text),
            CellValue::Integer(value) => write!(f, "{}", value),
            CellValue::Number(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

/// Read access to a rectangular table
pub trait TableSource {
    /// Name used for the suggested filename and the worksheet
    fn table_name(&self) -> &str;

    fn column_names(&self) -> Vec<String>;

    fn row_count(&self) -> usize;

    /// Value at `row`, `column`; both are in range when called by the exporter
    fn cell(&self, row: usize, column: usize) -> CellValue;
}

impl TableSource for [HotspotRecord] {
    fn table_name(&self) -> &str {
        constants::HOTSPOT_TABLE_NAME
    }

    fn column_names(&self) -> Vec<String> {
        columns::ALL.iter().map(|name| name.to_string()).collect()
    }

    fn row_count(&self) -> usize {
        self.len()
    }

    fn cell(&self, row: usize, column: usize) -> CellValue {
        let record = &self[row];
        match column {
            0 => match &record.id {
                crate::RecordId::Numeric(id) => CellValue::Integer(*id),
                crate::RecordId::Text(id) => CellValue::Text(id.clone()),
            },
            1 => CellValue::Text(record.name.clone()),
            2 => CellValue::Number(record.latitude),
            3 => CellValue::Number(record.longitude),
            4 => CellValue::Text(record.status.clone()),
            5 => CellValue::Text(record.notes.clone()),
            _ => CellValue::Text(record.image_reference.clone()),
        }
    }
}

// =============================================================================
// Format
// =============================================================================

/// Serialization format of an export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => CSV_CONTENT_TYPE,
            ExportFormat::Xlsx => XLSX_CONTENT_TYPE,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            other => Err(Error::configuration(format!(
                "Unknown export format '{}'. Available formats: csv, xlsx",
                other
            ))),
        }
    }
}

// =============================================================================
// Export
// =============================================================================

/// Column-projected rows in output order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportTable {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

/// A serialized export ready for download
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPayload {
    pub table: ExportTable,
    pub serialized: Vec<u8>,
    pub content_type: &'static str,
    pub suggested_filename: String,
}

enum ColumnSource {
    Field(usize),
    RowNumber,
}

/// Project `table` onto `requested` columns
pub fn project_table<T, S>(table: &T, requested: &[S]) -> Result<ExportTable>
where
    T: TableSource + ?Sized,
    S: AsRef<str>,
{
    if requested.is_empty() {
        return Err(Error::configuration(
            "At least one export column is required".to_string(),
        ));
    }

    let available = table.column_names();
    let sources = requested
        .iter()
        .map(|name| {
            let name = name.as_ref();
            if name == columns::ROW_NUMBER {
                return Ok(ColumnSource::RowNumber);
            }
            available
                .iter()
                .position(|column| column == name)
                .map(ColumnSource::Field)
                .ok_or_else(|| Error::schema(name, &available))
        })
        .collect::<Result<Vec<_>>>()?;

    let rows = (0..table.row_count())
        .map(|row| {
            sources
                .iter()
                .map(|source| match source {
                    ColumnSource::Field(column) => table.cell(row, *column),
                    ColumnSource::RowNumber => CellValue::Integer(row as i64 + 1),
                })
                .collect()
        })
        .collect();

    Ok(ExportTable {
        name: table.table_name().to_string(),
        columns: requested.iter().map(|name| name.as_ref().to_string()).collect(),
        rows,
    })
}

/// Project and serialize a table
pub fn export<T, S>(table: &T, columns: &[S], format: ExportFormat) -> Result<ExportPayload>
where
    T: TableSource + ?Sized,
    S: AsRef<str>,
{
    let projected = project_table(table, columns)?;

    let serialized = match format {
        ExportFormat::Csv => csv_writer::write_csv(&projected)?,
        ExportFormat::Xlsx => xlsx_writer::write_xlsx(&projected)?,
    };

    debug!(
        "Exported {} rows x {} columns of '{}' as {} ({} bytes)",
        projected.rows.len(),
        projected.columns.len(),
        projected.name,
        format,
        serialized.len()
    );

    let suggested_filename = format!("{}.{}", file_stem(&projected.name), format.extension());

    Ok(ExportPayload {
        table: projected,
        serialized,
        content_type: format.content_type(),
        suggested_filename,
    })
}

/// Reduce a table name to a portable filename stem
fn file_stem(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
            stem.push(ch);
        } else if !stem.ends_with('_') {
            stem.push('_');
        }
    }

    let stem = stem.trim_matches('_');
    if stem.is_empty() {
        "export".to_string()
    } else {
        stem.to_string()
    }
}
