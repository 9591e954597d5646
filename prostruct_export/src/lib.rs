#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Serializers turning a [`StructuredRecord`] into downloadable artifacts.
//!
//! JSON uses the record's compact camelCase keys. CSV and the text report go
//! through [`sections`], the titled view of the same record.

mod error;
pub mod json;
pub mod report;
pub mod sections;
pub mod table;

pub use error::{ExportError, Result};
pub use json::{from_json, to_json};
pub use report::to_text;
pub use sections::{COLUMNS, sections};
pub use table::to_csv;

use prostruct_core::{OutputFormat, StructuredRecord};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One serialized rendering of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub format: OutputFormat,
    pub content: String,
}

impl Artifact {
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        self.format.file_name()
    }

    #[must_use]
    pub const fn mime(&self) -> &'static str {
        self.format.mime()
    }

    /// Write the artifact into `dir` under its file name, creating `dir` if needed.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        std::fs::write(&path, &self.content)?;
        info!(
            "Wrote {} ({}, {} bytes)",
            path.display(),
            self.mime(),
            self.content.len()
        );
        Ok(path)
    }
}

/// Serialize `record` in one format.
pub fn export(record: &StructuredRecord, format: OutputFormat) -> Result<Artifact> {
    let content = match format {
        OutputFormat::Json => to_json(record)?,
        OutputFormat::Csv => to_csv(record)?,
        OutputFormat::Text => to_text(record),
    };
    debug!(%format, bytes = content.len(), "Record serialized");
    Ok(Artifact { format, content })
}

/// Serialize `record` in each of `formats`, in order.
pub fn export_all(record: &StructuredRecord, formats: &[OutputFormat]) -> Result<Vec<Artifact>> {
    formats.iter().map(|format| export(record, *format)).collect()
}
