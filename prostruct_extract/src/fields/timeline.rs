use prostruct_core::{DiseaseState, Procedure, Treatment};

use super::{FieldExtractor, group};
use crate::patterns::patterns;

/// Disease states in sub-pattern order: progressions, post-prostatectomy,
/// adjuvant treatment, biochemical recurrence. Only progressions repeat.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiseaseStateExtractor;

impl FieldExtractor for DiseaseStateExtractor {
    type Output = Vec<DiseaseState>;
    const FIELD: &'static str = "diseaseStates";

    fn extract(&self, text: &str) -> Vec<DiseaseState> {
        let p = patterns();

        let mut states: Vec<DiseaseState> = p
            .disease_progression
            .captures_iter(text)
            .map(|caps| DiseaseState::Closed {
                state: group(&caps, 1).to_string(),
                end_date: group(&caps, 2).to_string(),
            })
            .collect();

        if let Some(caps) = p.post_prostatectomy.captures(text) {
            states.push(DiseaseState::Closed {
                state: "post-prostatectomy state".to_string(),
                end_date: group(&caps, 1).to_string(),
            });
        }

        if let Some(caps) = p.adjuvant_treatment.captures(text) {
            states.push(DiseaseState::Range {
                state: "adjuvant treatment".to_string(),
                start_date: group(&caps, 2).to_string(),
                end_date: group(&caps, 3).to_string(),
            });
        }

        if let Some(caps) = p.biochemical_recurrence.captures(text) {
            states.push(DiseaseState::Open {
                state: "biochemical recurrence".to_string(),
                start_date: group(&caps, 1).to_string(),
            });
        }

        states
    }
}

/// Every `Following <procedure> in <date>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcedureExtractor;

impl FieldExtractor for ProcedureExtractor {
    type Output = Vec<Procedure>;
    const FIELD: &'static str = "procedures";

    fn extract(&self, text: &str) -> Vec<Procedure> {
        patterns()
            .procedure
            .captures_iter(text)
            .map(|caps| Procedure::named(group(&caps, 1), group(&caps, 2)))
            .collect()
    }
}

/// Treatments in sub-pattern order: completed courses, scheduled hormonal
/// regimens, then the current second-line therapy.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreatmentExtractor;

impl FieldExtractor for TreatmentExtractor {
    type Output = Vec<Treatment>;
    const FIELD: &'static str = "treatments";

    fn extract(&self, text: &str) -> Vec<Treatment> {
        let p = patterns();

        let courses = p.therapy_course.captures_iter(text).map(|caps| Treatment::Range {
            kind: format!("{} therapy", group(&caps, 1)),
            start_date: group(&caps, 2).to_string(),
            end_date: group(&caps, 3).to_string(),
        });

        let schedules = p
            .hormonal_schedule
            .captures_iter(text)
            .map(|caps| Treatment::Closed {
                kind: "hormonal therapy".to_string(),
                end_date: group(&caps, 2).to_string(),
                description: format!("{} injections every 3 months", group(&caps, 1)),
            });

        let current = p
            .current_treatment
            .captures(text)
            .map(|caps| Treatment::Descriptive {
                kind: "second-line hormonal therapy".to_string(),
                description: group(&caps, 1).to_string(),
            });

        courses.chain(schedules).chain(current).collect()
    }
}
