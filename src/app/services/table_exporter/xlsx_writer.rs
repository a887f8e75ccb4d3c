//! XLSX serialization
//!
//! Produces a workbook with a single worksheet named after the table. The
//! document creation date is pinned so repeated exports are byte-identical.

use super::{CellValue, ExportTable};
use crate::constants::{MAX_SHEET_NAME_LEN, WORKBOOK_CREATION_DATE};
use crate::{Error, Result};
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, Workbook};

pub fn write_xlsx(table: &ExportTable) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let (year, month, day) = WORKBOOK_CREATION_DATE;
    let created = ExcelDateTime::from_ymd(year, month, day)
        .map_err(|e| Error::spreadsheet("Invalid workbook creation date", e))?;
    let properties = DocProperties::new().set_creation_datetime(&created);
    workbook.set_properties(&properties);

    {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(sheet_name(&table.name))
            .map_err(|e| Error::spreadsheet(format!("Invalid sheet name '{}'", table.name), e))?;

        let header_format = Format::new().set_bold();
        for (col, name) in table.columns.iter().enumerate() {
            worksheet.write_string_with_format(0, column_index(col)?, name, &header_format)?;
        }

        for (index, row) in table.rows.iter().enumerate() {
            let row_index = u32::try_from(index + 1).map_err(|_| {
                Error::configuration(format!(
                    "Table '{}' has too many rows for a worksheet",
                    table.name
                ))
            })?;

            for (col, cell) in row.iter().enumerate() {
                let col_index = column_index(col)?;
                match cell {
                    CellValue::Text(text) => {
                        worksheet.write_string(row_index, col_index, text)?;
                    }
                    CellValue::Integer(value) => {
                        worksheet.write_number(row_index, col_index, *value as f64)?;
                    }
                    CellValue::Number(value) if value.is_finite() => {
                        worksheet.write_number(row_index, col_index, *value)?;
                    }
                    CellValue::Number(value) => {
                        worksheet.write_string(row_index, col_index, value.to_string())?;
                    }
                }
            }
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| Error::spreadsheet("Failed to serialize workbook", e))
}

fn column_index(col: usize) -> Result<u16> {
    u16::try_from(col)
        .map_err(|_| Error::configuration(format!("Column {} exceeds worksheet width", col)))
}

/// Make a table name acceptable as an Excel worksheet name
fn sheet_name(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|ch| match ch {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            other => other,
        })
        .take(MAX_SHEET_NAME_LEN)
        .collect();

    let cleaned = cleaned.trim_matches('\'');
    if cleaned.is_empty() {
        "Sheet1".to_string()
    } else {
        cleaned.to_string()
    }
}
