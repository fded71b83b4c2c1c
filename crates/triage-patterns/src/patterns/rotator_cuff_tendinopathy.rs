use std::sync::LazyLock;

use crate::pattern::{PatternEntry, SeverityRange};
use crate::ConditionPattern;

/// Rotator cuff tendinopathy. Lateral shoulder pain with a painful arc and
/// pain lying on the affected side.
pub struct RotatorCuffTendinopathy;

impl ConditionPattern for RotatorCuffTendinopathy {
    fn id(&self) -> &str {
        "rotator_cuff_tendinopathy"
    }

    fn name(&self) -> &str {
        "Rotator Cuff Tendinopathy"
    }

    fn entries(&self) -> &[PatternEntry] {
        static ENTRIES: LazyLock<Vec<PatternEntry>> = LazyLock::new(|| {
            vec![
                PatternEntry::new("pain_location", "Outer shoulder", 1.5),
                PatternEntry::new("painful_arc", true, 2.0),
                PatternEntry::new("night_pain", true, 1.0),
                PatternEntry::new("aggravating_factors", &["Reaching overhead", "Lying on side"][..], 1.0),
                PatternEntry::new("onset", "Gradual", 0.5),
            ]
        });
        &ENTRIES
    }

    fn severity_ranges(&self) -> &[SeverityRange] {
        static RANGES: LazyLock<Vec<SeverityRange>> =
            LazyLock::new(|| SeverityRange::bands(0.5, 0.8));
        &RANGES
    }
}
