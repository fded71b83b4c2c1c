use std::sync::LazyLock;

use crate::pattern::{PatternEntry, SeverityRange};
use crate::ConditionPattern;

/// Carpal tunnel syndrome. Median-nerve paraesthesia, worse at night and
/// relieved by shaking the hand.
pub struct CarpalTunnelSyndrome;

impl ConditionPattern for CarpalTunnelSyndrome {
    fn id(&self) -> &str {
        "carpal_tunnel_syndrome"
    }

    fn name(&self) -> &str {
        "Carpal Tunnel Syndrome"
    }

    fn entries(&self) -> &[PatternEntry] {
        static ENTRIES: LazyLock<Vec<PatternEntry>> = LazyLock::new(|| {
            vec![
                PatternEntry::new("pain_location", &["Wrist", "Hand", "Fingers"][..], 1.0),
                PatternEntry::new("numbness_tingling", true, 2.0),
                PatternEntry::new("night_symptoms", true, 1.5),
                PatternEntry::new("easing_factors", "Shaking hand", 1.0),
                PatternEntry::new("grip_weakness", true, 1.0),
            ]
        });
        &ENTRIES
    }

    fn severity_ranges(&self) -> &[SeverityRange] {
        static RANGES: LazyLock<Vec<SeverityRange>> =
            LazyLock::new(|| SeverityRange::bands(0.5, 0.75));
        &RANGES
    }
}
