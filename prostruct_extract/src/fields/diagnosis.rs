use prostruct_core::Diagnosis;

use super::{FieldExtractor, first_group, number};
use crate::patterns::patterns;

/// Label stored when the narrative mentions prostate cancer at all.
pub const PROSTATE_CANCER: &str = "Prostate Cancer";

/// Four independent sub-matches; any subset may be present.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagnosisExtractor;

impl FieldExtractor for DiagnosisExtractor {
    type Output = Diagnosis;
    const FIELD: &'static str = "diagnosis";

    fn extract(&self, text: &str) -> Diagnosis {
        let p = patterns();

        let cancer_type = if p.cancer_type.is_match(text) {
            PROSTATE_CANCER.to_string()
        } else {
            String::new()
        };

        Diagnosis {
            cancer_type,
            diagnosis_date: first_group(&p.diagnosis_date, text, 1)
                .unwrap_or_default()
                .to_string(),
            gleason_score: first_group(&p.gleason_score, text, 1).and_then(number),
            pathologic_stage: first_group(&p.pathologic_stage, text, 1)
                .unwrap_or_default()
                .to_string(),
        }
    }
}
