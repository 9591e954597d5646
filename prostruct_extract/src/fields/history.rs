use std::ops::Range;

use super::{FieldExtractor, group};
use crate::patterns::patterns;

/// Literal entry appended when the narrative rules out prior cancer.
pub const NO_PRIOR_CANCER: &str = "No prior history of cancer";

/// Every `history of <condition>` in text order, then the no-prior-cancer
/// statement if present.
///
/// A generic match that begins inside a no-prior-cancer statement belongs to
/// that statement and is not reported a second time.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistoryExtractor;

impl FieldExtractor for HistoryExtractor {
    type Output = Vec<String>;
    const FIELD: &'static str = "medicalHistory";

    fn extract(&self, text: &str) -> Vec<String> {
        let p = patterns();
        let statements: Vec<Range<usize>> = p
            .no_prior_cancer
            .find_iter(text)
            .map(|m| m.range())
            .collect();

        let mut history: Vec<String> = p
            .history
            .captures_iter(text)
            .filter(|caps| {
                caps.get(0)
                    .is_some_and(|m| !statements.iter().any(|s| s.contains(&m.start())))
            })
            .map(|caps| group(&caps, 1))
            .filter(|condition| !condition.is_empty())
            .map(str::to_string)
            .collect();

        if !statements.is_empty() {
            history.push(NO_PRIOR_CANCER.to_string());
        }

        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comorbidities_in_order_then_literal_last() {
        let text = "No prior history of cancer. He has a history of hypertension. \
                    He also has a history of diabetes.";
        assert_eq!(
            HistoryExtractor.extract(text),
            vec!["hypertension", "diabetes", NO_PRIOR_CANCER]
        );
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(
            HistoryExtractor.extract("HISTORY OF gout; no prior HISTORY of cancer"),
            vec!["gout", NO_PRIOR_CANCER]
        );
    }

    #[test]
    fn condition_runs_until_punctuation() {
        assert_eq!(
            HistoryExtractor.extract("history of type 2 diabetes mellitus, controlled"),
            vec!["type 2 diabetes mellitus"]
        );
    }

    #[test]
    fn nothing_found_is_empty() {
        assert!(HistoryExtractor.extract("unremarkable").is_empty());
    }
}
