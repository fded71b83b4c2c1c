use jiff::Timestamp;
use tracing::{info, warn};
use uuid::Uuid;

use triage_core::models::graph::GraphNode;

use crate::catalog::GraphSource;
use crate::error::ExaminationError;
use crate::state::{CompletedTest, RefinedDiagnosis, TestResult, TestState};

/// Reported when the flow ends without a mapped diagnosis.
pub const NARROWED_PLACEHOLDER: &str = "Differential narrowed; no single diagnosis mapped";

/// Start a guided examination for a region.
///
/// A region without a decision graph yields a state with no graph rather
/// than an error. A start node that is already terminal completes the flow
/// immediately.
pub fn initialize(assessment_id: Uuid, region: &str, source: &dyn GraphSource) -> TestState {
    let Some(graph) = source.graph_for(region) else {
        info!(%assessment_id, region, "no decision graph for region, guided tests unavailable");
        return TestState {
            assessment_id,
            region: region.to_string(),
            graph: None,
            current_node_id: None,
            completed_tests: Vec::new(),
            is_complete: false,
            terminal_node: None,
        };
    };

    let start = graph.start_node.clone();
    let start_node = graph.node(&start).cloned();
    let mut state = TestState {
        assessment_id,
        region: region.to_string(),
        graph: Some(graph),
        current_node_id: Some(start),
        completed_tests: Vec::new(),
        is_complete: false,
        terminal_node: None,
    };
    match start_node {
        Some(node) if !node.is_terminal => {}
        other => finish(&mut state, other),
    }

    info!(%assessment_id, region, complete = state.is_complete, "guided examination initialized");
    state
}

/// The examination to perform next, or `None` when the flow has ended or no
/// graph is available.
pub fn current_test(state: &TestState) -> Option<&GraphNode> {
    let graph = state.graph.as_deref()?;
    let node = graph.node(state.current_node_id.as_deref()?)?;
    (!node.is_terminal).then_some(node)
}

/// Record the outcome of the current test and follow the matching edge.
pub fn record_result(
    state: &TestState,
    test_id: &str,
    result: TestResult,
    notes: Option<String>,
) -> Result<TestState, ExaminationError> {
    let Some(graph) = state.graph.clone() else {
        return Err(ExaminationError::NoGuidedFlow {
            region: state.region.clone(),
        });
    };
    if state.is_complete {
        return Err(ExaminationError::AlreadyComplete);
    }
    let node = match current_test(state) {
        Some(node) if node.id == test_id => node.clone(),
        _ => {
            return Err(ExaminationError::NodeMismatch {
                expected: state.current_node_id.clone(),
                received: test_id.to_string(),
            });
        }
    };

    let mut next = state.clone();
    next.completed_tests.push(CompletedTest {
        test_id: node.id.clone(),
        test_name: node.name.clone(),
        result,
        notes,
        timestamp: Timestamp::now(),
    });

    let edge = match result {
        TestResult::Positive => node.on_positive.as_deref(),
        TestResult::Negative => node.on_negative.as_deref(),
    };
    next.current_node_id = edge.map(str::to_string);

    match edge.map(|id| (id, graph.node(id))) {
        Some((_, Some(target))) if !target.is_terminal => {}
        Some((_, Some(target))) => finish(&mut next, Some(target.clone())),
        Some((id, None)) => {
            warn!(region = %next.region, from = %node.id, to = id, "edge leads to an undefined node, ending flow");
            finish(&mut next, None);
        }
        None => finish(&mut next, None),
    }
    Ok(next)
}

/// Summarize the examination into a refined diagnosis.
pub fn summarize(state: &TestState) -> RefinedDiagnosis {
    let final_suspected_condition = state
        .terminal_node
        .as_ref()
        .and_then(|node| node.diagnosis_mapping.clone())
        .unwrap_or_else(|| NARROWED_PLACEHOLDER.to_string());

    let (supporting_evidence, contrary_evidence): (Vec<_>, Vec<_>) = state
        .completed_tests
        .iter()
        .cloned()
        .partition(|test| test.result == TestResult::Positive);

    let path_taken = state
        .completed_tests
        .iter()
        .map(|test| format!("{} ({})", test.test_name, test.result.as_str()))
        .collect();

    RefinedDiagnosis {
        assessment_id: state.assessment_id,
        region: state.region.clone(),
        is_complete: state.is_complete,
        final_suspected_condition,
        supporting_evidence,
        contrary_evidence,
        path_taken,
        completed_tests: state.completed_tests.clone(),
    }
}

fn finish(state: &mut TestState, terminal: Option<GraphNode>) {
    state.is_complete = true;
    info!(
        assessment_id = %state.assessment_id,
        region = %state.region,
        tests = state.completed_tests.len(),
        diagnosis = terminal.as_ref().and_then(|n| n.diagnosis_mapping.as_deref()).unwrap_or("none"),
        "guided examination complete"
    );
    state.terminal_node = terminal;
}
