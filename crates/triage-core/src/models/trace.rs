//! The assessment trace: the append-only answer log plus everything derived
//! from it. This is the artifact handed to clinician-facing review.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::rules::Effects;

pub const INITIAL_LIKELIHOOD: u8 = 50;
pub const MAX_LIKELIHOOD: u8 = 100;

/// One entry in the answer log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AskedQuestion {
    pub question_id: String,
    pub question_text: String,
    pub category: String,
    pub condition_name: String,
    /// The value exactly as submitted, whether or not it matched an option.
    pub answer: String,
    /// The effects that were applied. Empty when the answer matched no option.
    pub effects: Effects,
    pub timestamp: jiff::Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RedFlag {
    pub question: String,
    pub answer: String,
    pub red_flag_text: Option<String>,
    pub timestamp: jiff::Timestamp,
}

/// Why a condition was opened for investigation or had its likelihood raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Reason {
    pub question_id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ConditionState {
    pub active: bool,
    /// Always within `0..=100`.
    pub likelihood: u8,
    pub rule_out_reasons: Vec<Reason>,
    pub confirmation_reasons: Vec<Reason>,
}

impl ConditionState {
    /// Every condition starts as an open differential.
    pub fn open() -> Self {
        Self {
            active: true,
            likelihood: INITIAL_LIKELIHOOD,
            rule_out_reasons: Vec::new(),
            confirmation_reasons: Vec::new(),
        }
    }

    /// Shift the likelihood by `delta`, clamped to `0..=100`.
    pub fn adjust_likelihood(&mut self, delta: i16) {
        let shifted = i16::from(self.likelihood) + delta;
        self.likelihood = shifted.clamp(0, i16::from(MAX_LIKELIHOOD)) as u8;
    }
}

impl Default for ConditionState {
    fn default() -> Self {
        Self::open()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CompletionReason {
    /// Forward play exhausted every question in the region.
    AllQuestionsAnswered,
    /// A clinician closed the assessment before every question was answered.
    ClinicianFinalized,
}

/// A condition with its state, in ranked position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RankedCondition {
    pub name: String,
    #[serde(flatten)]
    pub state: ConditionState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentTrace {
    pub region: String,
    pub asked_questions: Vec<AskedQuestion>,
    pub red_flags: Vec<RedFlag>,
    pub ranked_conditions: Vec<RankedCondition>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn likelihood_clamps_at_both_ends() {
        let mut state = ConditionState::open();
        for _ in 0..10 {
            state.adjust_likelihood(15);
        }
        assert_eq!(state.likelihood, 100);

        for _ in 0..10 {
            state.adjust_likelihood(-15);
        }
        assert_eq!(state.likelihood, 0);
    }

    #[test]
    fn ranked_condition_flattens_state() {
        let ranked = RankedCondition {
            name: "Spinal Stenosis".to_string(),
            state: ConditionState::open(),
        };
        let json = serde_json::to_value(&ranked).unwrap();
        assert_eq!(json["likelihood"], 50);
        assert_eq!(json["active"], true);
        assert!(json["ruleOutReasons"].as_array().unwrap().is_empty());
    }
}
