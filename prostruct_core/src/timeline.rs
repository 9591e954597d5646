//! Dated entries describing how the disease and its treatment evolved.
//!
//! Entries differ in which dates the narrative provides, so each kind is a
//! tagged union over the date shapes rather than a loose mapping. The enums
//! are untagged on the wire: a variant is recognized by the keys it carries,
//! which keeps the JSON identical to the flat per-entry objects consumers
//! expect. Variant order matters for deserialization, most keys first.

use serde::{Deserialize, Serialize};

/// A disease state with whatever bounds the narrative gave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum DiseaseState {
    /// Both start and end are known.
    Range {
        state: String,
        start_date: String,
        end_date: String,
    },
    /// Only the onset is known.
    Open { state: String, start_date: String },
    /// Only the end is known.
    Closed { state: String, end_date: String },
}

impl DiseaseState {
    #[must_use]
    pub fn state(&self) -> &str {
        match self {
            Self::Range { state, .. } | Self::Open { state, .. } | Self::Closed { state, .. } => {
                state
            }
        }
    }

    #[must_use]
    pub fn start_date(&self) -> Option<&str> {
        match self {
            Self::Range { start_date, .. } | Self::Open { start_date, .. } => Some(start_date),
            Self::Closed { .. } => None,
        }
    }

    #[must_use]
    pub fn end_date(&self) -> Option<&str> {
        match self {
            Self::Range { end_date, .. } | Self::Closed { end_date, .. } => Some(end_date),
            Self::Open { .. } => None,
        }
    }
}

/// A dated procedure. The procedure name doubles as its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Procedure {
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
    pub description: String,
}

impl Procedure {
    /// Builds an entry whose kind and description are both `name`.
    #[must_use]
    pub fn named(name: &str, date: &str) -> Self {
        Self {
            kind: name.to_string(),
            date: date.to_string(),
            description: name.to_string(),
        }
    }
}

/// A treatment course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum Treatment {
    /// A completed course with start and end.
    Range {
        #[serde(rename = "type")]
        kind: String,
        start_date: String,
        end_date: String,
    },
    /// A scheduled regimen known only by when it stopped.
    Closed {
        #[serde(rename = "type")]
        kind: String,
        end_date: String,
        description: String,
    },
    /// An ongoing treatment with no dates.
    Descriptive {
        #[serde(rename = "type")]
        kind: String,
        description: String,
    },
}

impl Treatment {
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Range { kind, .. } | Self::Closed { kind, .. } | Self::Descriptive { kind, .. } => {
                kind
            }
        }
    }

    #[must_use]
    pub fn start_date(&self) -> Option<&str> {
        match self {
            Self::Range { start_date, .. } => Some(start_date),
            Self::Closed { .. } | Self::Descriptive { .. } => None,
        }
    }

    #[must_use]
    pub fn end_date(&self) -> Option<&str> {
        match self {
            Self::Range { end_date, .. } | Self::Closed { end_date, .. } => Some(end_date),
            Self::Descriptive { .. } => None,
        }
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Closed { description, .. } | Self::Descriptive { description, .. } => {
                Some(description)
            }
            Self::Range { .. } => None,
        }
    }
}
