use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExaminationError {
    /// The caller's view of the flow has drifted from the state it passed in.
    #[error("test '{received}' is not the current test (expected {})", .expected.as_deref().unwrap_or("none"))]
    NodeMismatch {
        expected: Option<String>,
        received: String,
    },

    #[error("no guided test flow for region '{region}'")]
    NoGuidedFlow { region: String },

    #[error("guided test flow is already complete")]
    AlreadyComplete,
}
