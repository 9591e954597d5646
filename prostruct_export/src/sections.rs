//! Titled presentation of a record, shared by the CSV and text serializers.
//!
//! This is the human-readable naming convention: sections carry Title Case
//! names and every value is labelled. Keys the record does not have (an
//! unknown number, an empty diagnosis text) are left out of the section.

use prostruct_core::{
    BloodCount, DiseaseState, ImagingStudy, LabResult, Medication, Procedure, StructuredRecord,
    Treatment,
};
use std::fmt;

pub const SECTION: &str = "Section";
pub const VALUE: &str = "Value";

/// CSV header: the section column, then every label a section can produce.
pub const COLUMNS: &[&str] = &[
    SECTION,
    VALUE,
    "Cancer Type",
    "Diagnosis Date",
    "Gleason Score",
    "Pathologic Stage",
    "Condition",
    "State",
    "Type",
    "Test",
    "Name",
    "Date",
    "Start Date",
    "End Date",
    "Description",
    "Unit",
    "Findings",
    "Dosage",
];

/// A rendered value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Integer(u64),
    Decimal(f64),
    /// A value that is itself a labelled mapping, e.g. blood count components.
    Nested(Vec<Field>),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(n) => write!(f, "{n}"),
            // Debug keeps the fractional part of whole numbers: 6.0, not 6.
            Self::Decimal(x) => write!(f, "{x:?}"),
            Self::Nested(fields) => {
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{}: {}", field.label, field.value)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: &'static str,
    pub value: Cell,
}

impl Field {
    fn text(label: &'static str, value: &str) -> Self {
        Self {
            label,
            value: Cell::Text(value.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// `None` when the record has no value for the field.
    Scalar(Option<Cell>),
    Mapping(Vec<Field>),
    Entries(Vec<Vec<Field>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub body: Body,
}

/// The record as titled sections, in field declaration order.
#[must_use]
pub fn sections(record: &StructuredRecord) -> Vec<Section> {
    vec![
        Section {
            title: "Name",
            body: Body::Scalar(non_empty(&record.name)),
        },
        Section {
            title: "Age",
            body: Body::Scalar(record.age.map(|age| Cell::Integer(u64::from(age)))),
        },
        Section {
            title: "Gender",
            body: Body::Scalar(non_empty(&record.gender)),
        },
        Section {
            title: "Diagnosis",
            body: Body::Mapping(diagnosis_fields(record)),
        },
        Section {
            title: "Medical History",
            body: entries(&record.medical_history, |condition| {
                vec![Field::text("Condition", condition)]
            }),
        },
        Section {
            title: "Disease States",
            body: entries(&record.disease_states, disease_state_fields),
        },
        Section {
            title: "Procedures",
            body: entries(&record.procedures, procedure_fields),
        },
        Section {
            title: "Treatments",
            body: entries(&record.treatments, treatment_fields),
        },
        Section {
            title: "Lab Results",
            body: entries(&record.lab_results, lab_result_fields),
        },
        Section {
            title: "Imaging Studies",
            body: entries(&record.imaging_studies, imaging_fields),
        },
        Section {
            title: "Medications",
            body: entries(&record.medications, medication_fields),
        },
    ]
}

fn non_empty(text: &str) -> Option<Cell> {
    (!text.is_empty()).then(|| Cell::Text(text.to_string()))
}

fn entries<T>(items: &[T], to_fields: impl Fn(&T) -> Vec<Field>) -> Body {
    Body::Entries(items.iter().map(to_fields).collect())
}

fn push_text(fields: &mut Vec<Field>, label: &'static str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        fields.push(Field::text(label, value));
    }
}

fn diagnosis_fields(record: &StructuredRecord) -> Vec<Field> {
    let diagnosis = &record.diagnosis;
    let mut fields = Vec::new();
    push_text(&mut fields, "Cancer Type", Some(diagnosis.cancer_type.as_str()));
    push_text(&mut fields, "Diagnosis Date", Some(diagnosis.diagnosis_date.as_str()));
    if let Some(score) = diagnosis.gleason_score {
        fields.push(Field {
            label: "Gleason Score",
            value: Cell::Integer(u64::from(score)),
        });
    }
    push_text(&mut fields, "Pathologic Stage", Some(diagnosis.pathologic_stage.as_str()));
    fields
}

fn disease_state_fields(state: &DiseaseState) -> Vec<Field> {
    let mut fields = vec![Field::text("State", state.state())];
    push_text(&mut fields, "Start Date", state.start_date());
    push_text(&mut fields, "End Date", state.end_date());
    fields
}

fn procedure_fields(procedure: &Procedure) -> Vec<Field> {
    vec![
        Field::text("Type", &procedure.kind),
        Field::text("Date", &procedure.date),
        Field::text("Description", &procedure.description),
    ]
}

fn treatment_fields(treatment: &Treatment) -> Vec<Field> {
    let mut fields = vec![Field::text("Type", treatment.kind())];
    push_text(&mut fields, "Start Date", treatment.start_date());
    push_text(&mut fields, "End Date", treatment.end_date());
    push_text(&mut fields, "Description", treatment.description());
    fields
}

fn lab_result_fields(result: &LabResult) -> Vec<Field> {
    let mut fields = vec![
        Field::text("Test", result.test()),
        Field::text("Date", result.date()),
    ];
    match result {
        LabResult::Quantity { value, unit, .. } => {
            if let Some(value) = value {
                fields.push(Field {
                    label: VALUE,
                    value: Cell::Decimal(*value),
                });
            }
            fields.push(Field::text("Unit", unit));
        }
        LabResult::Panel { value, .. } => fields.push(Field {
            label: VALUE,
            value: Cell::Nested(blood_count_fields(value)),
        }),
    }
    fields
}

fn blood_count_fields(count: &BloodCount) -> Vec<Field> {
    let mut fields = Vec::new();
    if let Some(wbc) = count.wbc {
        fields.push(Field {
            label: "WBC",
            value: Cell::Decimal(wbc),
        });
    }
    if let Some(rbc) = count.rbc {
        fields.push(Field {
            label: "RBC",
            value: Cell::Decimal(rbc),
        });
    }
    if let Some(platelets) = count.platelets {
        fields.push(Field {
            label: "Platelets",
            value: Cell::Integer(u64::from(platelets)),
        });
    }
    fields
}

fn imaging_fields(study: &ImagingStudy) -> Vec<Field> {
    vec![
        Field::text("Type", &study.kind),
        Field::text("Date", &study.date),
        Field::text("Findings", &study.findings),
    ]
}

fn medication_fields(medication: &Medication) -> Vec<Field> {
    vec![
        Field::text("Name", &medication.name),
        Field::text("Start Date", &medication.start_date),
        Field::text("Dosage", &medication.dosage),
    ]
}
