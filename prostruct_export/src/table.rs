//! CSV serializer.
//!
//! One row per scalar or mapping section and one row per sequence entry,
//! every row as wide as [`COLUMNS`].

use csv::Writer;
use prostruct_core::StructuredRecord;

use crate::error::{ExportError, Result};
use crate::sections::{Body, COLUMNS, Field, VALUE, sections};

/// Render `record` as CSV with a header row.
pub fn to_csv(record: &StructuredRecord) -> Result<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(COLUMNS)?;

    for section in sections(record) {
        match section.body {
            Body::Scalar(cell) => {
                let mut row = blank_row(section.title);
                if let Some(cell) = cell {
                    row[column(VALUE)] = cell.to_string();
                }
                writer.write_record(&row)?;
            }
            Body::Mapping(fields) => writer.write_record(&fill_row(section.title, &fields))?,
            Body::Entries(entries) => {
                for fields in &entries {
                    writer.write_record(&fill_row(section.title, fields))?;
                }
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

fn blank_row(title: &str) -> Vec<String> {
    let mut row = vec![String::new(); COLUMNS.len()];
    row[0] = title.to_string();
    row
}

fn fill_row(title: &str, fields: &[Field]) -> Vec<String> {
    let mut row = blank_row(title);
    for field in fields {
        row[column(field.label)] = field.value.to_string();
    }
    row
}

/// Index of `label` in the header. Labels come from a closed set that the
/// header lists in full, so a miss falls back to the value column.
fn column(label: &str) -> usize {
    COLUMNS
        .iter()
        .position(|c| *c == label)
        .unwrap_or(1)
}
