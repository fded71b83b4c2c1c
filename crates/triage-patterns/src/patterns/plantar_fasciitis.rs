use std::sync::LazyLock;

use crate::pattern::{PatternEntry, SeverityRange};
use crate::ConditionPattern;

/// Plantar fasciitis. Medial heel pain worst with the first steps in the
/// morning.
pub struct PlantarFasciitis;

impl ConditionPattern for PlantarFasciitis {
    fn id(&self) -> &str {
        "plantar_fasciitis"
    }

    fn name(&self) -> &str {
        "Plantar Fasciitis"
    }

    fn entries(&self) -> &[PatternEntry] {
        static ENTRIES: LazyLock<Vec<PatternEntry>> = LazyLock::new(|| {
            vec![
                PatternEntry::new("pain_location", "Heel", 2.0),
                PatternEntry::new("first_step_pain", true, 2.0),
                PatternEntry::new("aggravating_factors", &["Standing", "Walking barefoot"][..], 1.0),
                PatternEntry::new("onset", "Gradual", 0.5),
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
