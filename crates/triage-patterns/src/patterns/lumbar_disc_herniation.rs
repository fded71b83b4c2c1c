use std::sync::LazyLock;

use crate::pattern::{PatternEntry, SeverityRange};
use crate::ConditionPattern;

/// Lumbar disc herniation with radicular leg pain.
/// Dermatomal pain below the knee, worse with sitting and Valsalva.
pub struct LumbarDiscHerniation;

impl ConditionPattern for LumbarDiscHerniation {
    fn id(&self) -> &str {
        "lumbar_disc_herniation"
    }

    fn name(&self) -> &str {
        "Lumbar Disc Herniation"
    }

    fn entries(&self) -> &[PatternEntry] {
        static ENTRIES: LazyLock<Vec<PatternEntry>> = LazyLock::new(|| {
            vec![
                PatternEntry::new("pain_location", &["Lower back", "Buttock", "Leg"][..], 1.0),
                PatternEntry::new("radiating_pain", true, 2.0),
                PatternEntry::new("valsalva", true, 1.5),
                PatternEntry::new("onset", "Sudden", 1.0),
                PatternEntry::new(
                    "aggravating_factors",
                    &["Sitting", "Bending forward", "Coughing", "Lifting"][..],
                    1.0,
                ),
                PatternEntry::new("numbness_tingling", true, 1.0),
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
