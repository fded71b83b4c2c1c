use std::sync::LazyLock;

use crate::pattern::{PatternEntry, SeverityRange};
use crate::ConditionPattern;

pub struct MechanicalLowBackPain;

impl ConditionPattern for MechanicalLowBackPain {
    fn id(&self) -> &str {
        "mechanical_low_back_pain"
    }

    fn name(&self) -> &str {
        "Mechanical Low Back Pain"
    }

    fn entries(&self) -> &[PatternEntry] {
        static ENTRIES: LazyLock<Vec<PatternEntry>> = LazyLock::new(|| {
            vec![
                PatternEntry::new("pain_location", "Lower back", 2.0),
                PatternEntry::new("radiating_pain", false, 1.0),
                PatternEntry::new("aggravating_factors", &["Lifting", "Bending forward", "Twisting"][..], 1.0),
                PatternEntry::new("easing_factors", &["Rest", "Changing position"][..], 1.0),
                PatternEntry::new("night_pain", false, 1.0),
            ]
        });
        &ENTRIES
    }

    fn severity_ranges(&self) -> &[SeverityRange] {
        static RANGES: LazyLock<Vec<SeverityRange>> =
            LazyLock::new(|| SeverityRange::bands(0.6, 0.85));
        &RANGES
    }
}
