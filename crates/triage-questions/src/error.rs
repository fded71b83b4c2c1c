use thiserror::Error;

use triage_core::error::CoreError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid rule document: {0}")]
    InvalidRuleDocument(String),

    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    #[error("question already answered: {0}")]
    QuestionAlreadyAnswered(String),
}

impl From<CoreError> for EngineError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidRuleDocument(msg) => EngineError::InvalidRuleDocument(msg),
            other => EngineError::InvalidRuleDocument(other.to_string()),
        }
    }
}
