//! triage-patterns
//!
//! The weighted-matching diagnostic engine and its built-in knowledge base of
//! musculoskeletal condition patterns. Pure data and pure functions, no
//! state, no I/O.

pub mod error;
pub mod matching;
pub mod pattern;
pub mod patterns;
pub mod similarity;

use error::PatternError;
use pattern::{PatternEntry, Severity, SeverityRange};

/// Trait implemented by each condition in the knowledge base.
pub trait ConditionPattern: Send + Sync {
    /// Unique identifier (e.g., "lumbar_disc_herniation").
    fn id(&self) -> &str;

    /// Human-readable condition name (e.g., "Lumbar Disc Herniation").
    fn name(&self) -> &str;

    /// The weighted symptom expectations for this condition.
    fn entries(&self) -> &[PatternEntry];

    /// Confidence bands in declaration order. The first band containing a
    /// confidence decides its severity.
    fn severity_ranges(&self) -> &[SeverityRange];

    fn severity_for(&self, confidence: f64) -> Option<Severity> {
        self.severity_ranges()
            .iter()
            .find(|range| range.contains(confidence))
            .map(|range| range.severity)
    }

    /// Check the pattern table for defects.
    fn validate(&self) -> Vec<PatternError> {
        let mut errors = Vec::new();
        if self.entries().is_empty() {
            errors.push(PatternError::EmptyPattern {
                pattern_id: self.id().to_string(),
            });
        }
        for entry in self.entries() {
            if !(entry.weight > 0.0) {
                errors.push(PatternError::InvalidWeight {
                    pattern_id: self.id().to_string(),
                    symptom: entry.symptom.clone(),
                    weight: entry.weight,
                });
            }
        }
        for range in self.severity_ranges() {
            if range.min < 0.0 || range.max > 1.0 || range.min > range.max {
                errors.push(PatternError::InvalidSeverityRange {
                    pattern_id: self.id().to_string(),
                    min: range.min,
                    max: range.max,
                });
            }
        }
        errors
    }
}

/// Return every built-in condition pattern, in ranking tie-break order.
pub fn all_patterns() -> Vec<Box<dyn ConditionPattern>> {
    vec![
        Box::new(patterns::lumbar_disc_herniation::LumbarDiscHerniation),
        Box::new(patterns::lumbar_spinal_stenosis::LumbarSpinalStenosis),
        Box::new(patterns::mechanical_low_back_pain::MechanicalLowBackPain),
        Box::new(patterns::cervical_radiculopathy::CervicalRadiculopathy),
        Box::new(patterns::rotator_cuff_tendinopathy::RotatorCuffTendinopathy),
        Box::new(patterns::knee_osteoarthritis::KneeOsteoarthritis),
        Box::new(patterns::carpal_tunnel_syndrome::CarpalTunnelSyndrome),
        Box::new(patterns::plantar_fasciitis::PlantarFasciitis),
    ]
}

/// Look up a condition pattern by ID.
pub fn get_pattern(id: &str) -> Result<Box<dyn ConditionPattern>, PatternError> {
    all_patterns()
        .into_iter()
        .find(|p| p.id() == id)
        .ok_or_else(|| PatternError::UnknownPattern(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_patterns_validate() {
        for pattern in all_patterns() {
            assert_eq!(pattern.validate(), Vec::new(), "{}", pattern.id());
        }
    }

    #[test]
    fn pattern_ids_are_unique() {
        let patterns = all_patterns();
        for (i, pattern) in patterns.iter().enumerate() {
            assert!(
                patterns[i + 1..].iter().all(|other| other.id() != pattern.id()),
                "duplicate id {}",
                pattern.id()
            );
        }
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(get_pattern("plantar_fasciitis").unwrap().name(), "Plantar Fasciitis");
        assert!(matches!(
            get_pattern("gout"),
            Err(PatternError::UnknownPattern(id)) if id == "gout"
        ));
    }

    #[test]
    fn first_containing_band_wins() {
        let pattern = get_pattern("lumbar_disc_herniation").unwrap();
        let boundary = pattern.severity_ranges()[1].min;
        assert_eq!(pattern.severity_for(boundary), Some(Severity::Mild));
        assert_eq!(pattern.severity_for(1.0), Some(Severity::Severe));
    }
}
