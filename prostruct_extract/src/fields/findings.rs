use prostruct_core::{BloodCount, ImagingStudy, LabResult};

use super::{FieldExtractor, decimal, group, number};
use crate::patterns::patterns;

/// Every PSA measurement, then at most one complete blood count.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabResultExtractor;

impl FieldExtractor for LabResultExtractor {
    type Output = Vec<LabResult>;
    const FIELD: &'static str = "labResults";

    fn extract(&self, text: &str) -> Vec<LabResult> {
        let p = patterns();

        let mut results: Vec<LabResult> = p
            .psa_level
            .captures_iter(text)
            .map(|caps| LabResult::psa(decimal(group(&caps, 1)), group(&caps, 2)))
            .collect();

        if let Some(caps) = p.blood_count.captures(text) {
            results.push(LabResult::Panel {
                test: "Complete blood count".to_string(),
                date: group(&caps, 1).to_string(),
                value: BloodCount {
                    wbc: decimal(group(&caps, 2)),
                    rbc: decimal(group(&caps, 3)),
                    platelets: number(group(&caps, 4)),
                },
            });
        }

        results
    }
}

/// Every `Imaging studies reveal ... as of the latest ... in ...`.
///
/// The findings clause comes first in the sentence and the study type second;
/// the study type is the entry's `kind`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImagingStudyExtractor;

impl FieldExtractor for ImagingStudyExtractor {
    type Output = Vec<ImagingStudy>;
    const FIELD: &'static str = "imagingStudies";

    fn extract(&self, text: &str) -> Vec<ImagingStudy> {
        patterns()
            .imaging_study
            .captures_iter(text)
            .map(|caps| ImagingStudy {
                kind: group(&caps, 2).to_string(),
                date: group(&caps, 3).to_string(),
                findings: group(&caps, 1).to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn psa_values_are_numeric() {
        let results = LabResultExtractor.extract(
            "PSA levels of 4.5 ng/mL as of March 2021. Later PSA levels of 0.2 ng/mL as of May 2022.",
        );

        assert_eq!(
            results,
            vec![
                LabResult::psa(Some(4.5), "March 2021"),
                LabResult::psa(Some(0.2), "May 2022"),
            ]
        );
    }

    #[test]
    fn malformed_psa_value_is_unknown() {
        let results = LabResultExtractor.extract("PSA levels of 1.2.3 ng/mL as of March 2021");
        assert_eq!(results, vec![LabResult::psa(None, "March 2021")]);
    }

    #[test]
    fn blood_count_is_appended_after_psa() {
        let text = "Complete blood count from April 2023 showed WBC: 6.2, RBC: 4.5, Platelets: 250. \
                    PSA levels of 12.1 ng/mL as of April 2023.";
        let results = LabResultExtractor.extract(text);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].test(), "PSA levels");
        assert_eq!(
            results[1],
            LabResult::Panel {
                test: "Complete blood count".to_string(),
                date: "April 2023".to_string(),
                value: BloodCount {
                    wbc: Some(6.2),
                    rbc: Some(4.5),
                    platelets: Some(250),
                },
            }
        );
    }

    #[test]
    fn imaging_binds_kind_to_study_type() {
        let studies = ImagingStudyExtractor.extract(
            "Imaging studies reveal bone metastases as of the latest PSMA PET scan in February 2024.",
        );
        assert_eq!(
            studies,
            vec![ImagingStudy {
                kind: "PSMA PET scan".to_string(),
                date: "February 2024".to_string(),
                findings: "bone metastases".to_string(),
            }]
        );
    }
}
