//! The assembled patient record.
//!
//! Field declaration order is the order every serializer renders in, so new
//! fields must be placed deliberately.

use serde::{Deserialize, Serialize};

use crate::findings::{ImagingStudy, LabResult};
use crate::timeline::{DiseaseState, Procedure, Treatment};

/// Structured view of one clinical narrative.
///
/// Every field always exists; an extractor that found nothing leaves its
/// field at the `Default` value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredRecord {
    /// Patient name or identifier, empty when absent.
    pub name: String,

    /// Age in years, `None` when absent or unparsable.
    pub age: Option<u32>,

    /// Gender exactly as written, empty when absent.
    pub gender: String,

    pub diagnosis: Diagnosis,

    /// Comorbidities in order of appearance.
    pub medical_history: Vec<String>,

    pub disease_states: Vec<DiseaseState>,

    pub procedures: Vec<Procedure>,

    pub treatments: Vec<Treatment>,

    pub lab_results: Vec<LabResult>,

    pub imaging_studies: Vec<ImagingStudy>,

    pub medications: Vec<Medication>,
}

impl StructuredRecord {
    /// Returns true when no extractor produced anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Total number of timeline-like entries across all sequence fields.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.medical_history.len()
            + self.disease_states.len()
            + self.procedures.len()
            + self.treatments.len()
            + self.lab_results.len()
            + self.imaging_studies.len()
            + self.medications.len()
    }
}

/// Diagnosis fragment. Text fields use the empty string for "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    pub cancer_type: String,

    /// Free-form "month year" text, never normalized.
    pub diagnosis_date: String,

    /// `None` stands for an unknown score and serializes as `null`.
    pub gleason_score: Option<u32>,

    /// pT staging code such as `pT3a`.
    pub pathologic_stage: String,
}

impl Diagnosis {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cancer_type.is_empty()
            && self.diagnosis_date.is_empty()
            && self.gleason_score.is_none()
            && self.pathologic_stage.is_empty()
    }
}

/// A current medication with its daily dosage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub name: String,
    pub start_date: String,
    /// Numeric amount with its unit, e.g. `"50 mg"`.
    pub dosage: String,
}
