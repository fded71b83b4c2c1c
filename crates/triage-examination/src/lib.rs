//! triage-examination
//!
//! The guided physical-test engine. Walks a region's decision graph one
//! examination at a time: every reached test must be recorded positive or
//! negative, and the flow ends at a terminal node (or at an edge that leads
//! nowhere). There is no way to skip a test.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod state;

pub use catalog::{GraphCatalog, GraphSource};
pub use engine::{current_test, initialize, record_result, summarize};
pub use error::ExaminationError;
pub use state::{CompletedTest, RefinedDiagnosis, TestResult, TestState};
