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

//! Pattern-based extraction of structured records from clinical narrative.

pub mod assembler;
pub mod fields;
pub mod patterns;

pub use assembler::{RecordAssembler, assemble, is_blank_input};
pub use fields::FieldExtractor;
pub use patterns::{CATALOG, PatternDef, PatternError, Patterns, patterns};
