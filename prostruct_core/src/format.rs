//! Output artifact formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three artifacts a record can be rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
    #[serde(alias = "txt")]
    Text,
}

impl OutputFormat {
    /// Every format, in the order artifacts are produced.
    pub const ALL: [Self; 3] = [Self::Json, Self::Csv, Self::Text];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "text",
        }
    }

    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }

    /// Download file name for the artifact.
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Json => "structured_data.json",
            Self::Csv => "structured_data.csv",
            Self::Text => "structured_data.txt",
        }
    }

    #[must_use]
    pub const fn mime(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
            Self::Text => "text/plain",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `OutputFormat::from_str` for an unrecognized name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown output format: {} (expected json, csv or text)", self.0)
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "text" | "txt" => Ok(Self::Text),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}
