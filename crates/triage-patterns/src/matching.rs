//! Weighted matching of symptom observations against condition patterns.
//!
//! Only categories present in the input count toward a pattern's total
//! weight, so a symptom the patient was never asked about neither helps nor
//! hurts. Sparse inputs therefore score high; the severity bands are
//! calibrated against that.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;

use triage_core::models::symptom::{Symptom, SymptomValue};

use crate::pattern::{Severity, BASE_RECOMMENDATIONS};
use crate::similarity::similarity;
use crate::ConditionPattern;

pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.2;
pub const DEFAULT_MAX_DIFFERENTIALS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct DiagnosisOptions {
    /// Results below this confidence are discarded.
    pub min_confidence: f64,
    /// How many results after the primary diagnosis to report.
    pub max_differentials: usize,
}

impl Default for DiagnosisOptions {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            max_differentials: DEFAULT_MAX_DIFFERENTIALS,
        }
    }
}

/// A pattern entry that contributed to a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MatchedPattern {
    pub symptom: String,
    pub weight: f64,
    pub similarity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Score {
    pub confidence: f64,
    pub matched_patterns: Vec<MatchedPattern>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiagnosisResult {
    pub condition_id: String,
    pub condition_name: String,
    pub confidence: f64,
    pub severity: Option<Severity>,
    pub matched_patterns: Vec<MatchedPattern>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DiagnosisStatus {
    Diagnosed,
    /// Symptoms were given but no condition reached the confidence threshold.
    NoMatch,
    /// No symptoms were given.
    InsufficientData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiagnosisReport {
    pub status: DiagnosisStatus,
    pub primary_diagnosis: Option<DiagnosisResult>,
    pub differential_diagnoses: Vec<DiagnosisResult>,
}

impl DiagnosisReport {
    fn empty(status: DiagnosisStatus) -> Self {
        Self {
            status,
            primary_diagnosis: None,
            differential_diagnoses: Vec::new(),
        }
    }
}

/// Score one condition pattern against the given symptoms.
///
/// When a category appears more than once in `symptoms`, the last response
/// is the one scored.
pub fn score(symptoms: &[Symptom], pattern: &dyn ConditionPattern) -> Score {
    let responses: HashMap<&str, &SymptomValue> = symptoms
        .iter()
        .map(|s| (s.category.as_str(), &s.response))
        .collect();

    let mut total_weight = 0.0;
    let mut weighted_score = 0.0;
    let mut matched_patterns = Vec::new();

    for entry in pattern.entries() {
        let Some(response) = responses.get(entry.symptom.as_str()) else {
            continue;
        };
        let sim = similarity(response, &entry.expected);
        total_weight += entry.weight;
        weighted_score += entry.weight * sim;
        if sim > 0.0 {
            matched_patterns.push(MatchedPattern {
                symptom: entry.symptom.clone(),
                weight: entry.weight,
                similarity: sim,
            });
        }
    }

    let confidence = if total_weight > 0.0 {
        (weighted_score / total_weight).clamp(0.0, 1.0)
    } else {
        0.0
    };

    Score {
        confidence,
        matched_patterns,
    }
}

/// Rank every pattern against the symptoms and build the differential.
pub fn diagnose(
    symptoms: &[Symptom],
    patterns: &[Box<dyn ConditionPattern>],
    options: &DiagnosisOptions,
) -> DiagnosisReport {
    if symptoms.is_empty() {
        return DiagnosisReport::empty(DiagnosisStatus::InsufficientData);
    }

    let mut results: Vec<DiagnosisResult> = patterns
        .iter()
        .filter_map(|pattern| {
            let scored = score(symptoms, pattern.as_ref());
            (scored.confidence >= options.min_confidence).then(|| {
                let severity = pattern.severity_for(scored.confidence);
                DiagnosisResult {
                    condition_id: pattern.id().to_string(),
                    condition_name: pattern.name().to_string(),
                    confidence: scored.confidence,
                    severity,
                    matched_patterns: scored.matched_patterns,
                    recommendations: recommendations(severity),
                }
            })
        })
        .collect();

    // Stable sort: equal confidences keep table order.
    results.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    let mut ranked = results.into_iter();
    let Some(primary) = ranked.next() else {
        return DiagnosisReport::empty(DiagnosisStatus::NoMatch);
    };
    let differential_diagnoses: Vec<DiagnosisResult> =
        ranked.take(options.max_differentials).collect();

    info!(
        symptoms = symptoms.len(),
        primary = %primary.condition_id,
        confidence = primary.confidence,
        differentials = differential_diagnoses.len(),
        "weighted match complete"
    );

    DiagnosisReport {
        status: DiagnosisStatus::Diagnosed,
        primary_diagnosis: Some(primary),
        differential_diagnoses,
    }
}

/// Base recommendations followed by the severity's additions.
pub fn recommendations(severity: Option<Severity>) -> Vec<String> {
    BASE_RECOMMENDATIONS
        .iter()
        .chain(severity.map(|s| s.recommendations()).unwrap_or_default())
        .map(|r| r.to_string())
        .collect()
}
