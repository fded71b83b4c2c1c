//! triage-questions
//!
//! The branching question engine. Walks a region's condition → question
//! ordering one question at a time, applying each answer's effects to
//! per-condition likelihood and red-flag state.
//!
//! State is an explicit value: every transition takes the caller's current
//! [`EngineState`] and returns a new one. The engine never stores or fetches
//! anything itself.
//!
//! The engine does not stop early on high confidence. Every question reachable
//! in traversal order is offered until the region is exhausted; stopping
//! sooner is a presentation decision for whoever renders the flow.

pub mod engine;
pub mod error;
pub mod resolve;
pub mod state;

pub use engine::{answer, complete, current_question, initialize, replay, symptoms, trace, undo};
pub use error::EngineError;
pub use state::{CompletedState, Cursor, EngineState, QuestionView};
