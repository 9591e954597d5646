//! Plain-text report serializer.

use prostruct_core::StructuredRecord;
use std::fmt;

use crate::sections::{Body, Cell, Field, Section, sections};

/// Render `record` as an indented plain-text report.
#[must_use]
pub fn to_text(record: &StructuredRecord) -> String {
    Report(&sections(record)).to_string()
}

struct Report<'a>(&'a [Section]);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.0.iter().enumerate() {
            match &section.body {
                Body::Scalar(Some(cell)) => {
                    writeln!(f, "{}: {}", section.title, single_line(&cell.to_string()))?;
                }
                Body::Scalar(None) => writeln!(f, "{}:", section.title)?,
                Body::Mapping(fields) => {
                    separate(f, i)?;
                    writeln!(f, "{}:", section.title)?;
                    write_fields(f, fields, 1)?;
                }
                Body::Entries(entries) => {
                    separate(f, i)?;
                    writeln!(f, "{}:", section.title)?;
                    for (n, fields) in entries.iter().enumerate() {
                        writeln!(f, "  Entry {}:", n + 1)?;
                        write_fields(f, fields, 2)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn separate(f: &mut fmt::Formatter<'_>, index: usize) -> fmt::Result {
    if index > 0 {
        writeln!(f)?;
    }
    Ok(())
}

fn write_fields(f: &mut fmt::Formatter<'_>, fields: &[Field], depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    for field in fields {
        if let Cell::Nested(inner) = &field.value {
            writeln!(f, "{indent}- {}:", field.label)?;
            write_fields(f, inner, depth + 1)?;
        } else {
            let value = single_line(&field.value.to_string());
            writeln!(f, "{indent}- {}: {value}", field.label)?;
        }
    }
    Ok(())
}

/// Collapse whitespace runs, line breaks included, so a value stays on its
/// bullet line.
fn single_line(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use prostruct_core::{BloodCount, Diagnosis, DiseaseState, LabResult};

    #[test]
    fn default_record_renders_headers_only() {
        let text = to_text(&StructuredRecord::default());
        assert!(text.starts_with("Name:\nAge:\nGender:\n\nDiagnosis:\n\nMedical History:\n"));
        assert!(text.ends_with("Medications:\n"));
        assert!(!text.contains("- "));
    }

    #[test]
    fn scalars_mappings_and_entries() {
        let record = StructuredRecord {
            name: "John".to_string(),
            age: Some(55),
            gender: "Male".to_string(),
            diagnosis: Diagnosis {
                cancer_type: "Prostate Cancer".to_string(),
                gleason_score: Some(7),
                ..Diagnosis::default()
            },
            disease_states: vec![DiseaseState::Open {
                state: "biochemical recurrence".to_string(),
                start_date: "March 2022".to_string(),
            }],
            ..StructuredRecord::default()
        };

        let text = to_text(&record);
        assert!(text.starts_with("Name: John\nAge: 55\nGender: Male\n"));
        assert!(text.contains(
            "Diagnosis:\n  - Cancer Type: Prostate Cancer\n  - Gleason Score: 7\n\n"
        ));
        assert!(text.contains(
            "Disease States:\n  Entry 1:\n    - State: biochemical recurrence\n    - Start Date: March 2022\n"
        ));
    }

    #[test]
    fn nested_values_are_indented_further() {
        let record = StructuredRecord {
            lab_results: vec![LabResult::Panel {
                test: "Complete blood count".to_string(),
                date: "April 2023".to_string(),
                value: BloodCount {
                    wbc: Some(6.0),
                    rbc: Some(4.5),
                    platelets: Some(250),
                },
            }],
            ..StructuredRecord::default()
        };

        let text = to_text(&record);
        assert!(text.contains(
            "    - Value:\n      - WBC: 6.0\n      - RBC: 4.5\n      - Platelets: 250\n"
        ));
    }

    #[test]
    fn multi_line_values_stay_on_their_bullet() {
        let record = StructuredRecord {
            name: "John\nSmith".to_string(),
            medical_history: vec!["hypertension\nand chronic kidney disease\n".to_string()],
            ..StructuredRecord::default()
        };

        let text = to_text(&record);
        assert!(text.starts_with("Name: John Smith\n"));
        assert!(text.contains("    - Condition: hypertension and chronic kidney disease\n"));
        assert!(!text.lines().any(|line| line.starts_with("and ") || line == "Smith"));
    }
}
