//! Field extractors.
//!
//! Each extractor owns one record field, reads the narrative and returns that
//! field's value. Extractors never fail: a pattern that does not match simply
//! leaves the field at its default.

mod demographics;
mod diagnosis;
mod findings;
mod history;
mod medications;
mod timeline;

pub use demographics::{AgeExtractor, GenderExtractor, NameExtractor};
pub use diagnosis::{DiagnosisExtractor, PROSTATE_CANCER};
pub use findings::{ImagingStudyExtractor, LabResultExtractor};
pub use history::{HistoryExtractor, NO_PRIOR_CANCER};
pub use medications::MedicationExtractor;
pub use timeline::{DiseaseStateExtractor, ProcedureExtractor, TreatmentExtractor};

use regex::{Captures, Regex};
use std::str::FromStr;

/// A pure function from narrative text to one record field.
pub trait FieldExtractor {
    /// The value stored in the record field.
    type Output;

    /// Compact name of the record field, used in log lines.
    const FIELD: &'static str;

    fn extract(&self, text: &str) -> Self::Output;
}

/// Trimmed text of capture group `index`, or `""` when the group did not take part.
pub(crate) fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str().trim())
}

/// Trimmed capture `index` of the first match of `re`.
pub(crate) fn first_group<'t>(re: &Regex, text: &'t str, index: usize) -> Option<&'t str> {
    re.captures(text).map(|caps| group(&caps, index))
}

/// Numeric coercion: digits that do not form a valid `T` become unknown.
pub(crate) fn number<T: FromStr>(raw: &str) -> Option<T> {
    raw.parse().ok()
}

/// Decimal coercion. Values too large to be finite are unknown as well, since
/// JSON has no representation for them.
pub(crate) fn decimal(raw: &str) -> Option<f64> {
    number::<f64>(raw).filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_coercion_never_panics() {
        assert_eq!(number::<u32>("7"), Some(7));
        assert_eq!(number::<u32>(""), None);
        assert_eq!(number::<u32>("99999999999"), None);
        assert_eq!(number::<f64>("1.2.3"), None);
        assert_eq!(number::<f64>("4.5"), Some(4.5));
        assert_eq!(decimal(&"9".repeat(400)), None);
        assert_eq!(decimal("6.2"), Some(6.2));
    }

    #[test]
    #[expect(clippy::unwrap_used, reason = "Literal test regex")]
    fn group_trims_and_defaults() {
        let re = Regex::new(r"a(\s*b\s*)(c)?").unwrap();
        let caps = re.captures("a  b  ").unwrap();
        assert_eq!(group(&caps, 1), "b");
        assert_eq!(group(&caps, 2), "");
    }
}
