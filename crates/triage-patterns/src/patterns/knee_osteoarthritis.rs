use std::sync::LazyLock;

use crate::pattern::{PatternEntry, SeverityRange};
use crate::ConditionPattern;

/// Knee osteoarthritis. Activity-related joint pain with brief morning
/// stiffness, usually over 45.
pub struct KneeOsteoarthritis;

impl ConditionPattern for KneeOsteoarthritis {
    fn id(&self) -> &str {
        "knee_osteoarthritis"
    }

    fn name(&self) -> &str {
        "Knee Osteoarthritis"
    }

    fn entries(&self) -> &[PatternEntry] {
        static ENTRIES: LazyLock<Vec<PatternEntry>> = LazyLock::new(|| {
            vec![
                PatternEntry::new("pain_location", "Knee", 1.5),
                PatternEntry::new("morning_stiffness", "Less than 30 minutes", 1.5),
                PatternEntry::new("age_band", &["45 to 60", "Over 60"][..], 1.0),
                PatternEntry::new("aggravating_factors", &["Stairs", "Walking", "Kneeling"][..], 1.0),
                PatternEntry::new("swelling", true, 0.5),
                PatternEntry::new("onset", "Gradual", 1.0),
            ]
        });
        &ENTRIES
    }

    fn severity_ranges(&self) -> &[SeverityRange] {
        static RANGES: LazyLock<Vec<SeverityRange>> =
            LazyLock::new(|| SeverityRange::bands(0.55, 0.8));
        &RANGES
    }
}
