use std::sync::LazyLock;

use crate::pattern::{PatternEntry, SeverityRange};
use crate::ConditionPattern;

/// Cervical radiculopathy. Neck pain with dermatomal arm pain and
/// paraesthesia, provoked by extension and rotation toward the painful side.
pub struct CervicalRadiculopathy;

impl ConditionPattern for CervicalRadiculopathy {
    fn id(&self) -> &str {
        "cervical_radiculopathy"
    }

    fn name(&self) -> &str {
        "Cervical Radiculopathy"
    }

    fn entries(&self) -> &[PatternEntry] {
        static ENTRIES: LazyLock<Vec<PatternEntry>> = LazyLock::new(|| {
            vec![
                PatternEntry::new("pain_location", &["Neck", "Shoulder blade", "Arm"][..], 1.0),
                PatternEntry::new("arm_pain", true, 2.0),
                PatternEntry::new("numbness_tingling", true, 1.5),
                PatternEntry::new("aggravating_factors", &["Looking up", "Turning head"][..], 1.0),
                PatternEntry::new("easing_factors", "Hand on head", 1.0),
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
