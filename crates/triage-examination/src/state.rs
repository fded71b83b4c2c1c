use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use triage_core::models::graph::{DecisionGraph, GraphNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum TestResult {
    Positive,
    Negative,
}

impl TestResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestResult::Positive => "positive",
            TestResult::Negative => "negative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CompletedTest {
    pub test_id: String,
    pub test_name: String,
    pub result: TestResult,
    pub notes: Option<String>,
    pub timestamp: jiff::Timestamp,
}

/// The state of one guided examination.
///
/// `graph` is `None` when the region has no decision graph; such a state has
/// no current test and accepts no results.
#[derive(Debug, Clone)]
pub struct TestState {
    pub(crate) assessment_id: Uuid,
    pub(crate) region: String,
    pub(crate) graph: Option<Arc<DecisionGraph>>,
    pub(crate) current_node_id: Option<String>,
    pub(crate) completed_tests: Vec<CompletedTest>,
    pub(crate) is_complete: bool,
    pub(crate) terminal_node: Option<GraphNode>,
}

impl TestState {
    pub fn assessment_id(&self) -> Uuid {
        self.assessment_id
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn graph(&self) -> Option<&DecisionGraph> {
        self.graph.as_deref()
    }

    pub fn has_guided_flow(&self) -> bool {
        self.graph.is_some()
    }

    pub fn current_node_id(&self) -> Option<&str> {
        self.current_node_id.as_deref()
    }

    pub fn completed_tests(&self) -> &[CompletedTest] {
        &self.completed_tests
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// The node the flow ended on. `None` while running, or when the final
    /// edge led to a node that does not exist.
    pub fn terminal_node(&self) -> Option<&GraphNode> {
        self.terminal_node.as_ref()
    }
}

/// The outcome of a guided examination, ready for the clinician record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RefinedDiagnosis {
    pub assessment_id: Uuid,
    pub region: String,
    pub is_complete: bool,
    pub final_suspected_condition: String,
    pub supporting_evidence: Vec<CompletedTest>,
    pub contrary_evidence: Vec<CompletedTest>,
    /// `"Test name (result)"` for every recorded test, in order.
    pub path_taken: Vec<String>,
    pub completed_tests: Vec<CompletedTest>,
}
