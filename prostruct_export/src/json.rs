//! JSON serializer.
//!
//! The record's serde derive is the compact naming convention: camelCase keys
//! in field declaration order, `null` for unknown numbers.

use prostruct_core::StructuredRecord;
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;

const INDENT: &[u8] = b"    ";

/// Pretty-print `record` with four-space indentation.
pub fn to_json(record: &StructuredRecord) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    record.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

/// Parse a document produced by [`to_json`].
pub fn from_json(json: &str) -> Result<StructuredRecord> {
    Ok(serde_json::from_str(json)?)
}
