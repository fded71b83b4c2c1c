//! triage-storage
//!
//! Loads region rule documents and decision graphs from a data directory.
//! Read-only: the engines' output is persisted by whoever hosts them.

pub mod documents;
pub mod error;
pub mod files;
