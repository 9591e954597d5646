use prostruct_core::Medication;

use super::{FieldExtractor, group};
use crate::patterns::patterns;

/// Every `Current medications include <drug> starting <date>, with a daily
/// dosage of <n> mg`. The dosage keeps its `mg` suffix.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedicationExtractor;

impl FieldExtractor for MedicationExtractor {
    type Output = Vec<Medication>;
    const FIELD: &'static str = "medications";

    fn extract(&self, text: &str) -> Vec<Medication> {
        patterns()
            .medication
            .captures_iter(text)
            .map(|caps| Medication {
                name: group(&caps, 1).to_string(),
                start_date: group(&caps, 2).to_string(),
                dosage: group(&caps, 3).to_string(),
            })
            .collect()
    }
}
