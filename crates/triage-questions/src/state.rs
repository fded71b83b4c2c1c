use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use triage_core::models::rules::{Question, RuleDocument};
use triage_core::models::trace::{
    AskedQuestion, AssessmentTrace, CompletionReason, ConditionState, RankedCondition, RedFlag,
};

/// Traversal position through the fixed condition → question ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cursor {
    pub condition_index: usize,
    pub question_index: usize,
}

/// The state of one patient assessment.
///
/// Only the transition functions in [`crate::engine`] produce new values;
/// callers read through the accessors and hand the value back on the next
/// transition.
#[derive(Debug, Clone)]
pub struct EngineState {
    pub(crate) rules: Arc<RuleDocument>,
    pub(crate) asked_questions: Vec<AskedQuestion>,
    pub(crate) condition_states: BTreeMap<String, ConditionState>,
    pub(crate) red_flags: Vec<RedFlag>,
    pub(crate) cursor: Cursor,
    pub(crate) pending_branch: Option<String>,
    pub(crate) is_complete: bool,
    pub(crate) completion_reason: Option<CompletionReason>,
}

impl EngineState {
    pub fn rules(&self) -> &RuleDocument {
        &self.rules
    }

    pub fn region(&self) -> &str {
        &self.rules.region
    }

    pub fn asked_questions(&self) -> &[AskedQuestion] {
        &self.asked_questions
    }

    pub fn condition_states(&self) -> &BTreeMap<String, ConditionState> {
        &self.condition_states
    }

    pub fn condition_state(&self, name: &str) -> Option<&ConditionState> {
        self.condition_states.get(name)
    }

    pub fn red_flags(&self) -> &[RedFlag] {
        &self.red_flags
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// A branch target set by the last answer's `next_question_id`, offered
    /// before the cursor scan resumes.
    pub fn pending_branch(&self) -> Option<&str> {
        self.pending_branch.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn completion_reason(&self) -> Option<CompletionReason> {
        self.completion_reason
    }

    pub(crate) fn is_asked(&self, question_id: &str) -> bool {
        self.asked_questions
            .iter()
            .any(|asked| asked.question_id == question_id)
    }

    /// Condition states in rank order: likelihood descending, declaration
    /// order among equals.
    pub(crate) fn ranked(&self) -> Vec<RankedCondition> {
        let mut ranked: Vec<RankedCondition> = self
            .rules
            .conditions
            .iter()
            .filter_map(|condition| {
                self.condition_states
                    .get(&condition.name)
                    .map(|state| RankedCondition {
                        name: condition.name.clone(),
                        state: state.clone(),
                    })
            })
            .collect();
        ranked.sort_by(|a, b| b.state.likelihood.cmp(&a.state.likelihood));
        ranked
    }
}

/// The question to ask next, with the progress a caller needs to render it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuestionView {
    pub question: Question,
    pub condition_name: String,
    pub answered_count: usize,
    /// Questions not yet answered, this one included.
    pub remaining_count: usize,
}

/// A finalized assessment with its ranked suspicion list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CompletedState {
    pub completion_reason: CompletionReason,
    pub primary_suspicion: Option<RankedCondition>,
    pub differential_diagnoses: Vec<RankedCondition>,
    pub trace: AssessmentTrace,
}
