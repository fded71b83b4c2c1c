use serde::{Deserialize, Serialize};
use ts_rs::TS;

use triage_core::models::symptom::SymptomValue;

/// One weighted expectation within a condition pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatternEntry {
    /// The symptom category this entry scores.
    pub symptom: String,
    pub expected: SymptomValue,
    pub weight: f64,
}

impl PatternEntry {
    pub fn new(symptom: &str, expected: impl Into<SymptomValue>, weight: f64) -> Self {
        Self {
            symptom: symptom.to_string(),
            expected: expected.into(),
            weight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

/// A confidence band mapped to a severity. Both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityRange {
    pub severity: Severity,
    pub min: f64,
    pub max: f64,
}

impl SeverityRange {
    pub fn contains(&self, confidence: f64) -> bool {
        confidence >= self.min && confidence <= self.max
    }

    /// A mild / moderate / severe table split at the two given boundaries.
    pub fn bands(moderate_from: f64, severe_from: f64) -> Vec<SeverityRange> {
        vec![
            SeverityRange {
                severity: Severity::Mild,
                min: 0.0,
                max: moderate_from,
            },
            SeverityRange {
                severity: Severity::Moderate,
                min: moderate_from,
                max: severe_from,
            },
            SeverityRange {
                severity: Severity::Severe,
                min: severe_from,
                max: 1.0,
            },
        ]
    }
}

/// Recommendations given with every diagnosis.
pub const BASE_RECOMMENDATIONS: &[&str] = &[
    "Review these findings with a physiotherapist or treating clinician",
    "Keep a symptom diary noting aggravating and easing activities",
    "Seek urgent care if new numbness, weakness, or bladder or bowel changes develop",
];

impl Severity {
    /// Additions to [`BASE_RECOMMENDATIONS`] for this severity.
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            Severity::Mild => &[
                "Stay active and continue normal activity as tolerated",
                "Start self-management education and a graded home exercise programme",
            ],
            Severity::Moderate => &[
                "Book a physiotherapy assessment within the next two weeks",
                "Modify aggravating activities in the short term",
            ],
            Severity::Severe => &[
                "Arrange a prompt clinical review",
                "Consider imaging or specialist referral if symptoms do not settle",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_belong_to_both_neighbours() {
        let bands = SeverityRange::bands(0.5, 0.75);
        assert!(bands[0].contains(0.5));
        assert!(bands[1].contains(0.5));
        assert!(bands[2].contains(1.0));
        assert!(!bands[2].contains(0.74));
    }
}
