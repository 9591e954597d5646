#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Data model shared by the extraction pipeline and the serializers.

pub mod findings;
pub mod format;
pub mod record;
pub mod timeline;
pub mod util;

pub use findings::{BloodCount, ImagingStudy, LabResult, PSA_UNIT};
pub use format::{OutputFormat, UnknownFormat};
pub use record::{Diagnosis, Medication, StructuredRecord};
pub use timeline::{DiseaseState, Procedure, Treatment};
pub use util::{input_fingerprint, short_fingerprint};
