//! triage-core
//!
//! Pure domain types for the triage decision core: rule documents, decision
//! graphs, symptom observations and the assessment trace. No I/O; this is the
//! shared vocabulary the engines, the document store and the service speak.

pub mod error;
pub mod models;
pub mod paths;
