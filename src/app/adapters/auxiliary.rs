//! Auxiliary datasets
//!
//! Opaque tables shown next to the hotspot map (collection schedules,
//! complaint tallies and the like). No schema is imposed beyond "it is
//! tabular"; every cell is kept as text and exported through the same
//! [`TableSource`] path as the hotspot records.

use crate::app::services::table_exporter::{CellValue, TableSource};
use crate::config::DatasetConfig;
use crate::{Error, Result};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// A named table of text cells
#[derive(Debug, Clone, PartialEq)]
pub struct AuxiliaryTable {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl AuxiliaryTable {
    /// Create a table, checking every row matches the header width
    pub fn new(name: impl Into<String>, columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let name = name.into();
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(Error::data_validation(format!(
                "Dataset '{}' row {} has {} cells, expected {}",
                name,
                index + 1,
                row.len(),
                columns.len()
            )));
        }

        Ok(Self {
            name,
            columns,
            rows,
        })
    }

    pub fn load_csv(name: impl Into<String>, path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            Error::io(format!("Failed to open dataset file: {}", path.display()), e)
        })?;
        Self::read_csv(name, file, &path.display().to_string())
    }

    /// Read a table from CSV; short rows are padded and long rows truncated
    /// to the header width
    pub fn read_csv<R: Read>(name: impl Into<String>, reader: R, origin: &str) -> Result<Self> {
        let name = name.into();
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(reader);

        let columns: Vec<String> = csv_reader
            .headers()
            .map_err(|e| Error::csv_parsing(origin, "Failed to read header row", Some(e)))?
            .iter()
            .map(|header| header.to_string())
            .collect();

        let mut rows = Vec::new();
        for (index, record) in csv_reader.records().enumerate() {
            let record = record.map_err(|e| {
                Error::csv_parsing(origin, format!("Failed to read row {}", index + 1), Some(e))
            })?;

            let mut row: Vec<String> = record.iter().map(|cell| cell.to_string()).collect();
            if row.len() != columns.len() {
                warn!(
                    "Dataset '{}' row {} has {} cells, expected {}",
                    name,
                    index + 1,
                    row.len(),
                    columns.len()
                );
                row.resize(columns.len(), String::new());
            }
            rows.push(row);
        }

        info!(
            "Loaded dataset '{}' from {}: {} rows x {} columns",
            name,
            origin,
            rows.len(),
            columns.len()
        );

        Self::new(name, columns, rows)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

impl TableSource for AuxiliaryTable {
    fn table_name(&self) -> &str {
        &self.name
    }

    fn column_names(&self) -> Vec<String> {
        self.columns.clone()
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell(&self, row: usize, column: usize) -> CellValue {
        CellValue::Text(self.rows[row][column].clone())
    }
}

/// The auxiliary tables available to a dashboard, in declaration order
#[derive(Debug, Clone, Default)]
pub struct DatasetCatalog {
    tables: Vec<AuxiliaryTable>,
}

impl DatasetCatalog {
    pub fn new(tables: Vec<AuxiliaryTable>) -> Self {
        Self { tables }
    }

    /// Load every declared dataset
    pub fn load(datasets: &[DatasetConfig]) -> Result<Self> {
        let tables = datasets
            .iter()
            .map(|dataset| AuxiliaryTable::load_csv(dataset.name.clone(), &dataset.path))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(tables))
    }

    /// Get a table by name
    pub fn get(&self, name: &str) -> Result<&AuxiliaryTable> {
        self.tables
            .iter()
            .find(|table| table.name == name)
            .ok_or_else(|| Error::not_found(name))
    }

    pub fn names(&self) -> Vec<&str> {
        self.tables.iter().map(|table| table.name.as_str()).collect()
    }

    pub fn tables(&self) -> &[AuxiliaryTable] {
        &self.tables
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
