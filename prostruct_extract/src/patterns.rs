//! Static catalog of extraction patterns.
//!
//! Every pattern the extractors use is declared here once as a [`PatternDef`]
//! and compiled lazily into [`Patterns`]. The catalog never changes at
//! runtime, so the compiled set is shared read-only by every extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Error type for pattern building.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The regex pattern is invalid.
    #[error("invalid regex for pattern `{id}`: {source}")]
    Regex {
        id: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Definition of a single extraction pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternDef {
    /// Unique identifier for this pattern.
    pub id: &'static str,

    /// Record field the pattern feeds.
    pub field: &'static str,

    /// Regex source. Capture groups are documented per definition.
    pub pattern: &'static str,
}

impl PatternDef {
    /// Compile this definition.
    ///
    /// # Errors
    /// Returns an error if the regex pattern is invalid.
    pub fn build(&self) -> Result<Regex, PatternError> {
        Regex::new(self.pattern).map_err(|source| PatternError::Regex {
            id: self.id,
            source,
        })
    }
}

/// `$1` = name or identifier.
pub const PATIENT_NAME: PatternDef = PatternDef {
    id: "patient_name",
    field: "name",
    pattern: r"Patient (?:Name|ID):\s*(\w+)",
};

/// `$1` = age in years.
pub const AGE: PatternDef = PatternDef {
    id: "age",
    field: "age",
    pattern: r"Age:\s*(\d+)",
};

/// `$1` = gender word.
pub const GENDER: PatternDef = PatternDef {
    id: "gender",
    field: "gender",
    pattern: r"Gender:\s*(\w+)",
};

pub const CANCER_TYPE: PatternDef = PatternDef {
    id: "cancer_type",
    field: "diagnosis",
    pattern: r"(?i)prostate cancer",
};

/// `$1` = diagnosis date.
pub const DIAGNOSIS_DATE: PatternDef = PatternDef {
    id: "diagnosis_date",
    field: "diagnosis",
    pattern: r"diagnosed with prostate cancer in ([\w\s]+ \d{4})",
};

/// `$1` = score digits.
pub const GLEASON_SCORE: PatternDef = PatternDef {
    id: "gleason_score",
    field: "diagnosis",
    pattern: r"Gleason score was (\d+)",
};

/// `$1` = pT code.
pub const PATHOLOGIC_STAGE: PatternDef = PatternDef {
    id: "pathologic_stage",
    field: "diagnosis",
    pattern: r"(?i)pathologic stage at diagnosis was (pT\w+)",
};

/// `$1` = condition.
pub const HISTORY: PatternDef = PatternDef {
    id: "history",
    field: "medicalHistory",
    pattern: r"(?i)history of ([\w\s]+)",
};

pub const NO_PRIOR_CANCER: PatternDef = PatternDef {
    id: "no_prior_cancer",
    field: "medicalHistory",
    pattern: r"(?i)No prior history of cancer",
};

/// `$1` = state, `$2` = end date.
pub const DISEASE_PROGRESSION: PatternDef = PatternDef {
    id: "disease_progression",
    field: "diseaseStates",
    pattern: r"progressed to ([\w\s]+) until ([\w\s]+ \d{4})",
};

/// `$1` = end date.
pub const POST_PROSTATECTOMY: PatternDef = PatternDef {
    id: "post_prostatectomy",
    field: "diseaseStates",
    pattern: r"post-prostatectomy state until ([\w\s]+ \d{4})",
};

/// `$1` = agent, `$2` = start date, `$3` = end date.
pub const ADJUVANT_TREATMENT: PatternDef = PatternDef {
    id: "adjuvant_treatment",
    field: "diseaseStates",
    pattern: r"Adjuvant treatment with ([\w\s]+) commenced in ([\w\s]+ \d{4}) and concluded in ([\w\s]+ \d{4})",
};

/// `$1` = onset date.
pub const BIOCHEMICAL_RECURRENCE: PatternDef = PatternDef {
    id: "biochemical_recurrence",
    field: "diseaseStates",
    pattern: r"biochemical recurrence detected in ([\w\s]+ \d{4})",
};

/// `$1` = procedure, `$2` = date.
pub const PROCEDURE: PatternDef = PatternDef {
    id: "procedure",
    field: "procedures",
    pattern: r"Following ([\w\s]+) in ([\w\s]+ \d{4})",
};

/// `$1` = agent (letters and spaces), `$2` = start date, `$3` = end date.
pub const THERAPY_COURSE: PatternDef = PatternDef {
    id: "therapy_course",
    field: "treatments",
    pattern: r"([A-Za-z\s]+) therapy commenced in ([\w\s]+ \d{4}) and concluded in ([\w\s]+ \d{4})",
};

/// `$1` = agent, `$2` = end date.
pub const HORMONAL_SCHEDULE: PatternDef = PatternDef {
    id: "hormonal_schedule",
    field: "treatments",
    pattern: r"hormonal therapy with ([\w\s]+) injections every 3 months until ([\w\s]+ \d{4})",
};

/// `$1` = agent.
pub const CURRENT_TREATMENT: PatternDef = PatternDef {
    id: "current_treatment",
    field: "treatments",
    pattern: r"Current treatment includes second-line hormonal therapy with ([\w\s]+)",
};

/// `$1` = value, `$2` = date.
pub const PSA_LEVEL: PatternDef = PatternDef {
    id: "psa_level",
    field: "labResults",
    pattern: r"PSA levels of ([\d.]+) ng/mL as of ([\w\s]+ \d{4})",
};

/// `$1` = date, `$2` = WBC, `$3` = RBC, `$4` = platelets.
pub const BLOOD_COUNT: PatternDef = PatternDef {
    id: "blood_count",
    field: "labResults",
    pattern: r"Complete blood count from ([\w\s]+ \d{4}) showed WBC: ([\d.]+), RBC: ([\d.]+), Platelets: (\d+)",
};

/// `$1` = findings, `$2` = study type, `$3` = date.
pub const IMAGING_STUDY: PatternDef = PatternDef {
    id: "imaging_study",
    field: "imagingStudies",
    pattern: r"Imaging studies reveal ([\w\s]+) as of the latest ([\w\s]+) in ([\w\s]+ \d{4})",
};

/// `$1` = drug, `$2` = start date, `$3` = dosage with unit.
pub const MEDICATION: PatternDef = PatternDef {
    id: "medication",
    field: "medications",
    pattern: r"Current medications include ([\w\s]+) starting ([\w\s]+ \d{4}), with a daily dosage of (\d+ mg)",
};

/// Every definition, grouped by the field it feeds.
pub const CATALOG: &[PatternDef] = &[
    PATIENT_NAME,
    AGE,
    GENDER,
    CANCER_TYPE,
    DIAGNOSIS_DATE,
    GLEASON_SCORE,
    PATHOLOGIC_STAGE,
    HISTORY,
    NO_PRIOR_CANCER,
    DISEASE_PROGRESSION,
    POST_PROSTATECTOMY,
    ADJUVANT_TREATMENT,
    BIOCHEMICAL_RECURRENCE,
    PROCEDURE,
    THERAPY_COURSE,
    HORMONAL_SCHEDULE,
    CURRENT_TREATMENT,
    PSA_LEVEL,
    BLOOD_COUNT,
    IMAGING_STUDY,
    MEDICATION,
];

/// The compiled catalog.
#[derive(Debug)]
pub struct Patterns {
    pub patient_name: Regex,
    pub age: Regex,
    pub gender: Regex,
    pub cancer_type: Regex,
    pub diagnosis_date: Regex,
    pub gleason_score: Regex,
    pub pathologic_stage: Regex,
    pub history: Regex,
    pub no_prior_cancer: Regex,
    pub disease_progression: Regex,
    pub post_prostatectomy: Regex,
    pub adjuvant_treatment: Regex,
    pub biochemical_recurrence: Regex,
    pub procedure: Regex,
    pub therapy_course: Regex,
    pub hormonal_schedule: Regex,
    pub current_treatment: Regex,
    pub psa_level: Regex,
    pub blood_count: Regex,
    pub imaging_study: Regex,
    pub medication: Regex,
}

impl Patterns {
    /// Compile every definition in the catalog.
    ///
    /// # Errors
    /// Returns the first pattern that fails to compile.
    pub fn compile() -> Result<Self, PatternError> {
        Ok(Self {
            patient_name: PATIENT_NAME.build()?,
            age: AGE.build()?,
            gender: GENDER.build()?,
            cancer_type: CANCER_TYPE.build()?,
            diagnosis_date: DIAGNOSIS_DATE.build()?,
            gleason_score: GLEASON_SCORE.build()?,
            pathologic_stage: PATHOLOGIC_STAGE.build()?,
            history: HISTORY.build()?,
            no_prior_cancer: NO_PRIOR_CANCER.build()?,
            disease_progression: DISEASE_PROGRESSION.build()?,
            post_prostatectomy: POST_PROSTATECTOMY.build()?,
            adjuvant_treatment: ADJUVANT_TREATMENT.build()?,
            biochemical_recurrence: BIOCHEMICAL_RECURRENCE.build()?,
            procedure: PROCEDURE.build()?,
            therapy_course: THERAPY_COURSE.build()?,
            hormonal_schedule: HORMONAL_SCHEDULE.build()?,
            current_treatment: CURRENT_TREATMENT.build()?,
            psa_level: PSA_LEVEL.build()?,
            blood_count: BLOOD_COUNT.build()?,
            imaging_study: IMAGING_STUDY.build()?,
            medication: MEDICATION.build()?,
        })
    }
}

#[expect(
    clippy::expect_used,
    reason = "Static regex catalog is covered by tests and cannot change at runtime"
)]
static PATTERNS: Lazy<Patterns> =
    Lazy::new(|| Patterns::compile().expect("Static pattern catalog is guaranteed to be valid"));

/// The shared compiled catalog.
#[must_use]
pub fn patterns() -> &'static Patterns {
    &PATTERNS
}
