use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    #[error("unknown condition pattern: {0}")]
    UnknownPattern(String),

    #[error("{pattern_id}: weight {weight} for '{symptom}' must be positive")]
    InvalidWeight {
        pattern_id: String,
        symptom: String,
        weight: f64,
    },

    #[error("{pattern_id}: severity range [{min}, {max}] is not within [0, 1]")]
    InvalidSeverityRange {
        pattern_id: String,
        min: f64,
        max: f64,
    },

    #[error("{pattern_id}: pattern has no entries")]
    EmptyPattern { pattern_id: String },
}
