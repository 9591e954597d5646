//! Laboratory results and imaging studies.

use serde::{Deserialize, Serialize};

/// Unit attached to every PSA measurement.
pub const PSA_UNIT: &str = "ng/mL";

/// A laboratory result. Untagged: a `unit` key marks a single quantity, an
/// object `value` marks a panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabResult {
    /// A single measured value such as a PSA level.
    Quantity {
        test: String,
        date: String,
        /// `None` when the captured digits did not form a number.
        value: Option<f64>,
        unit: String,
    },
    /// A multi-component panel such as a complete blood count.
    Panel {
        test: String,
        date: String,
        value: BloodCount,
    },
}

impl LabResult {
    /// Builds a PSA measurement.
    #[must_use]
    pub fn psa(value: Option<f64>, date: &str) -> Self {
        Self::Quantity {
            test: "PSA levels".to_string(),
            date: date.to_string(),
            value,
            unit: PSA_UNIT.to_string(),
        }
    }

    #[must_use]
    pub fn test(&self) -> &str {
        match self {
            Self::Quantity { test, .. } | Self::Panel { test, .. } => test,
        }
    }

    #[must_use]
    pub fn date(&self) -> &str {
        match self {
            Self::Quantity { date, .. } | Self::Panel { date, .. } => date,
        }
    }
}

/// Complete blood count components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BloodCount {
    pub wbc: Option<f64>,
    pub rbc: Option<f64>,
    pub platelets: Option<u32>,
}

/// An imaging study and what it showed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagingStudy {
    /// Study modality, e.g. `PSMA PET scan`.
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
    pub findings: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn psa_serializes_flat_with_numeric_value() {
        let json = serde_json::to_value(LabResult::psa(Some(4.5), "March 2021"))
            .expect("lab result should serialize");
        assert_eq!(json["value"], serde_json::json!(4.5));
        assert_eq!(json["unit"], "ng/mL");
        assert_eq!(json["test"], "PSA levels");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn panel_is_recognized_by_object_value() {
        let parsed: LabResult = serde_json::from_str(
            r#"{"test":"Complete blood count","date":"April 2023","value":{"wbc":6.2,"rbc":4.5,"platelets":250}}"#,
        )
        .expect("panel should parse");

        let LabResult::Panel { value, .. } = parsed else {
            panic!("expected a panel");
        };
        assert_eq!(value.platelets, Some(250));
        assert_eq!(value.wbc, Some(6.2));
    }
}
