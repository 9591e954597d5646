//! Record assembly.
//!
//! The assembler runs every field extractor over the same narrative and
//! assigns each result to the field that extractor owns. Fields never
//! overlap, so assembly is plain assignment.

use prostruct_core::{StructuredRecord, short_fingerprint};
use tracing::{debug, debug_span};

use crate::fields::{
    AgeExtractor, DiagnosisExtractor, DiseaseStateExtractor, FieldExtractor, GenderExtractor,
    HistoryExtractor, ImagingStudyExtractor, LabResultExtractor, MedicationExtractor,
    NameExtractor, ProcedureExtractor, TreatmentExtractor,
};

/// Returns true when the input carries no narrative at all.
#[must_use]
pub fn is_blank_input(text: &str) -> bool {
    text.trim().is_empty()
}

/// Runs the full extractor set.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordAssembler;

impl RecordAssembler {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Build the record for `text`. Blank input yields the default record.
    #[must_use]
    pub fn assemble(&self, text: &str) -> StructuredRecord {
        let span = debug_span!("assemble", input = %short_fingerprint(text), bytes = text.len());
        let _guard = span.enter();

        if is_blank_input(text) {
            debug!("Blank input, returning default record");
            return StructuredRecord::default();
        }

        let record = StructuredRecord {
            name: run(&NameExtractor, text),
            age: run(&AgeExtractor, text),
            gender: run(&GenderExtractor, text),
            diagnosis: run(&DiagnosisExtractor, text),
            medical_history: run(&HistoryExtractor, text),
            disease_states: run(&DiseaseStateExtractor, text),
            procedures: run(&ProcedureExtractor, text),
            treatments: run(&TreatmentExtractor, text),
            lab_results: run(&LabResultExtractor, text),
            imaging_studies: run(&ImagingStudyExtractor, text),
            medications: run(&MedicationExtractor, text),
        };

        debug!(
            entries = record.entry_count(),
            has_diagnosis = !record.diagnosis.is_empty(),
            "Record assembled"
        );

        record
    }
}

fn run<E: FieldExtractor>(extractor: &E, text: &str) -> E::Output {
    let output = extractor.extract(text);
    debug!(field = E::FIELD, "Field extracted");
    output
}

/// Assemble a record with the default assembler.
#[must_use]
pub fn assemble(text: &str) -> StructuredRecord {
    RecordAssembler::new().assemble(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_default_record() {
        assert!(is_blank_input("   \n\t"));
        assert!(assemble("").is_empty());
        assert!(assemble(" \n ").is_empty());
    }

    #[test]
    fn demographics_only_leaves_other_fields_default() {
        let record = assemble("Patient Name: John Age: 55 Gender: Male");

        assert_eq!(record.name, "John");
        assert_eq!(record.age, Some(55));
        assert_eq!(record.gender, "Male");
        assert_eq!(
            record,
            StructuredRecord {
                name: "John".to_string(),
                age: Some(55),
                gender: "Male".to_string(),
                ..StructuredRecord::default()
            }
        );
    }
}
