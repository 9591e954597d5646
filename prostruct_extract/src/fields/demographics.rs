use super::{FieldExtractor, first_group, number};
use crate::patterns::patterns;

/// First `Patient Name:` / `Patient ID:` token.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameExtractor;

impl FieldExtractor for NameExtractor {
    type Output = String;
    const FIELD: &'static str = "name";

    fn extract(&self, text: &str) -> String {
        first_group(&patterns().patient_name, text, 1)
            .unwrap_or_default()
            .to_string()
    }
}

/// First `Age: <digits>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgeExtractor;

impl FieldExtractor for AgeExtractor {
    type Output = Option<u32>;
    const FIELD: &'static str = "age";

    fn extract(&self, text: &str) -> Option<u32> {
        first_group(&patterns().age, text, 1).and_then(number)
    }
}

/// First `Gender: <word>`, case preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenderExtractor;

impl FieldExtractor for GenderExtractor {
    type Output = String;
    const FIELD: &'static str = "gender";

    fn extract(&self, text: &str) -> String {
        first_group(&patterns().gender, text, 1)
            .unwrap_or_default()
            .to_string()
    }
}
