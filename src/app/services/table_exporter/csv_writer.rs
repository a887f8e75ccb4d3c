//! CSV serialization: UTF-8, comma delimited, `\n` terminated, quoted only
//! where a field needs it.

use super::ExportTable;
use crate::{Error, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};

pub fn write_csv(table: &ExportTable) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .delimiter(b',')
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer
        .write_record(&table.columns)
        .map_err(|e| Error::csv_parsing(&table.name, "Failed to write header row", Some(e)))?;

    for (index, row) in table.rows.iter().enumerate() {
        writer
            .write_record(row.iter().map(|cell| cell.to_string()))
            .map_err(|e| {
                Error::csv_parsing(
                    &table.name,
                    format!("Failed to write row {}", index + 1),
                    Some(e),
                )
            })?;
    }

    writer
        .into_inner()
        .map_err(|e| Error::io("Failed to flush CSV buffer", e.into_error()))
}
