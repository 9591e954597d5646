//! Integration tests for the extraction pipeline.
//!
//! These tests verify that:
//! - A complete narrative fills every field
//! - Unmatched fields keep their defaults
//! - Assembly is deterministic

use prostruct_core::{
    BloodCount, DiseaseState, ImagingStudy, LabResult, Medication, Procedure, StructuredRecord,
    Treatment,
};
use prostruct_extract::fields::{NO_PRIOR_CANCER, PROSTATE_CANCER};
use prostruct_extract::{CATALOG, RecordAssembler, assemble};

const NARRATIVE: &str = "Patient Name: Robert Age: 67 Gender: Male.
He was diagnosed with prostate cancer in June 2020. The Gleason score was 7 and the pathologic stage at diagnosis was pT3a.
He has a history of hypertension. He also has a history of hyperlipidemia. No prior history of cancer.
Following radical prostatectomy in July 2020, the disease progressed to a post-prostatectomy state until April 2021.
Adjuvant treatment with radiation therapy commenced in May 2021 and concluded in June 2021.
A biochemical recurrence detected in March 2022. He then received hormonal therapy with leuprolide injections every 3 months until May 2023.
The disease progressed to castration resistant disease until June 2023.
Current treatment includes second-line hormonal therapy with enzalutamide.
PSA levels of 4.5 ng/mL as of March 2021. PSA levels of 12.1 ng/mL as of June 2023.
Complete blood count from June 2023 showed WBC: 6.2, RBC: 4.5, Platelets: 250.
Imaging studies reveal bone metastases as of the latest PSMA PET scan in February 2024.
Current medications include enzalutamide starting July 2023, with a daily dosage of 160 mg.";

fn s(value: &str) -> String {
    value.to_string()
}

#[test]
fn test_full_narrative_fills_every_field() {
    let record = assemble(NARRATIVE);

    assert_eq!(record.name, "Robert");
    assert_eq!(record.age, Some(67));
    assert_eq!(record.gender, "Male");

    assert_eq!(record.diagnosis.cancer_type, PROSTATE_CANCER);
    assert_eq!(record.diagnosis.diagnosis_date, "June 2020");
    assert_eq!(record.diagnosis.gleason_score, Some(7));
    assert_eq!(record.diagnosis.pathologic_stage, "pT3a");

    assert_eq!(
        record.medical_history,
        vec![s("hypertension"), s("hyperlipidemia"), s(NO_PRIOR_CANCER)]
    );

    assert_eq!(
        record.disease_states,
        vec![
            DiseaseState::Closed {
                state: s("castration resistant disease"),
                end_date: s("June 2023"),
            },
            DiseaseState::Closed {
                state: s("post-prostatectomy state"),
                end_date: s("April 2021"),
            },
            DiseaseState::Range {
                state: s("adjuvant treatment"),
                start_date: s("May 2021"),
                end_date: s("June 2021"),
            },
            DiseaseState::Open {
                state: s("biochemical recurrence"),
                start_date: s("March 2022"),
            },
        ]
    );

    assert_eq!(
        record.procedures,
        vec![Procedure::named("radical prostatectomy", "July 2020")]
    );

    // The course pattern takes the whole letter run before "therapy".
    assert_eq!(
        record.treatments,
        vec![
            Treatment::Range {
                kind: s("Adjuvant treatment with radiation therapy"),
                start_date: s("May 2021"),
                end_date: s("June 2021"),
            },
            Treatment::Closed {
                kind: s("hormonal therapy"),
                end_date: s("May 2023"),
                description: s("leuprolide injections every 3 months"),
            },
            Treatment::Descriptive {
                kind: s("second-line hormonal therapy"),
                description: s("enzalutamide"),
            },
        ]
    );

    assert_eq!(
        record.lab_results,
        vec![
            LabResult::psa(Some(4.5), "March 2021"),
            LabResult::psa(Some(12.1), "June 2023"),
            LabResult::Panel {
                test: s("Complete blood count"),
                date: s("June 2023"),
                value: BloodCount {
                    wbc: Some(6.2),
                    rbc: Some(4.5),
                    platelets: Some(250),
                },
            },
        ]
    );

    assert_eq!(
        record.imaging_studies,
        vec![ImagingStudy {
            kind: s("PSMA PET scan"),
            date: s("February 2024"),
            findings: s("bone metastases"),
        }]
    );

    assert_eq!(
        record.medications,
        vec![Medication {
            name: s("enzalutamide"),
            start_date: s("July 2023"),
            dosage: s("160 mg"),
        }]
    );
}

#[test]
fn test_demographics_scenario() {
    let record = assemble("Patient Name: John Age: 55 Gender: Male");

    let expected = StructuredRecord {
        name: s("John"),
        age: Some(55),
        gender: s("Male"),
        ..StructuredRecord::default()
    };
    assert_eq!(record, expected);
}

#[test]
fn test_diagnosis_scenario() {
    let record =
        assemble("The patient was diagnosed with prostate cancer in June 2020. Gleason score was 7.");

    assert_eq!(record.diagnosis.diagnosis_date, "June 2020");
    assert_eq!(record.diagnosis.gleason_score, Some(7));
    assert_eq!(record.diagnosis.cancer_type, PROSTATE_CANCER);
    assert!(record.diagnosis.pathologic_stage.is_empty());
}

#[test]
fn test_history_scenario() {
    let record = assemble(
        "He reports a history of hypertension. There is also a history of diabetes. \
         No prior history of cancer.",
    );

    assert_eq!(record.medical_history.len(), 3);
    assert_eq!(
        record.medical_history.last().map(String::as_str),
        Some(NO_PRIOR_CANCER)
    );
}

#[test]
fn test_lab_result_scenario() {
    let record = assemble("PSA levels of 4.5 ng/mL as of March 2021");

    assert_eq!(record.lab_results.len(), 1);
    let LabResult::Quantity { value, unit, .. } = &record.lab_results[0] else {
        panic!("expected a quantity");
    };
    assert_eq!(*value, Some(4.5));
    assert_eq!(unit, "ng/mL");
}

#[test]
fn test_empty_input_scenario() {
    let record = assemble("");
    assert_eq!(record, StructuredRecord::default());
}

#[test]
fn test_assembly_is_idempotent() {
    let assembler = RecordAssembler::new();
    let first = assembler.assemble(NARRATIVE);
    let second = assembler.assemble(NARRATIVE);
    assert_eq!(first, second);
    assert_eq!(format!("{first:?}"), format!("{second:?}"));
}

#[test]
fn test_odd_inputs_never_panic() {
    let inputs = [
        "Age: ٥٥",
        "Age: 99999999999999999999 Gleason score was 99999999999999",
        "PSA levels of . ng/mL as of May 2020",
        "Complete blood count from May 2020 showed WBC: ., RBC: 1.2.3, Platelets: 5",
        "history of",
        "Patient Name:",
        "\u{0}\u{7f}ünïcödé history of ünïcödé",
    ];

    for input in inputs {
        let record = assemble(input);
        assert!(record.entry_count() <= input.len());
    }

    let record = assemble(inputs[1]);
    assert_eq!(record.age, None);
    assert_eq!(record.diagnosis.gleason_score, None);

    let record = assemble(inputs[3]);
    let LabResult::Panel { value, .. } = &record.lab_results[0] else {
        panic!("expected a panel");
    };
    assert_eq!(value.wbc, None);
    assert_eq!(value.rbc, None);
    assert_eq!(value.platelets, Some(5));
}

#[test]
fn test_catalog_covers_every_field() {
    let fields: Vec<&str> = CATALOG.iter().map(|def| def.field).collect();
    for field in [
        "name",
        "age",
        "gender",
        "diagnosis",
        "medicalHistory",
        "diseaseStates",
        "procedures",
        "treatments",
        "labResults",
        "imagingStudies",
        "medications",
    ] {
        assert!(fields.contains(&field), "no pattern feeds `{field}`");
    }
}
