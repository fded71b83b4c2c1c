//! Similarity between a patient response and a pattern's expected value.

use triage_core::models::symptom::SymptomValue;

/// Score of a partial (substring) text match.
pub const PARTIAL_TEXT_MATCH: f64 = 0.8;

/// Similarity in `[0, 1]` between `response` and `expected`.
///
/// - expected flag: 1.0 only for the same flag. "Yes"/"No" text responses
///   count as flags.
/// - expected list: a list response scores the share of its elements found in
///   the expected list, over the longer of the two lengths; a text response
///   scores 1.0 when it is one of the expected values.
/// - expected text: 1.0 on case-insensitive equality, 0.8 when either contains
///   the other case-insensitively.
///
/// Every other pairing scores 0.0.
pub fn similarity(response: &SymptomValue, expected: &SymptomValue) -> f64 {
    match (expected, response) {
        (SymptomValue::Flag(expected), response) => {
            if response.as_flag() == Some(*expected) { 1.0 } else { 0.0 }
        }
        (SymptomValue::List(expected), SymptomValue::List(response)) => {
            let denominator = expected.len().max(response.len());
            if denominator == 0 {
                return 0.0;
            }
            let found = response.iter().filter(|r| expected.contains(r)).count();
            found as f64 / denominator as f64
        }
        (SymptomValue::List(expected), SymptomValue::Text(response)) => {
            if expected.contains(response) { 1.0 } else { 0.0 }
        }
        (SymptomValue::Text(expected), SymptomValue::Text(response)) => {
            let expected = expected.to_lowercase();
            let response = response.to_lowercase();
            if expected == response {
                1.0
            } else if expected.contains(&response) || response.contains(&expected) {
                PARTIAL_TEXT_MATCH
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}
