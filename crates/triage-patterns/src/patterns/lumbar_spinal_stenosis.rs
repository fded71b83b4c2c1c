use std::sync::LazyLock;

use crate::pattern::{PatternEntry, SeverityRange};
use crate::ConditionPattern;

/// Lumbar spinal stenosis. Neurogenic claudication relieved by flexion,
/// typically in older adults.
pub struct LumbarSpinalStenosis;

impl ConditionPattern for LumbarSpinalStenosis {
    fn id(&self) -> &str {
        "lumbar_spinal_stenosis"
    }

    fn name(&self) -> &str {
        "Lumbar Spinal Stenosis"
    }

    fn entries(&self) -> &[PatternEntry] {
        static ENTRIES: LazyLock<Vec<PatternEntry>> = LazyLock::new(|| {
            vec![
                PatternEntry::new("neurogenic_claudication", true, 2.0),
                PatternEntry::new("easing_factors", &["Sitting", "Bending forward"][..], 1.5),
                PatternEntry::new("age_band", "Over 60", 1.0),
                PatternEntry::new("aggravating_factors", &["Walking", "Standing"][..], 1.0),
                PatternEntry::new("onset", "Gradual", 0.5),
                PatternEntry::new("bilateral_symptoms", true, 1.0),
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
