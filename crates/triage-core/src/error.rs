use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid rule document: {0}")]
    InvalidRuleDocument(String),

    #[error("invalid decision graph: {0}")]
    InvalidDecisionGraph(String),
}
