use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use jiff::Timestamp;
use tracing::{debug, info, warn};

use triage_core::models::rules::{AnswerOption, Effects, Question, RuleDocument};
use triage_core::models::symptom::{Symptom, SymptomValue};
use triage_core::models::trace::{
    AskedQuestion, AssessmentTrace, CompletionReason, ConditionState, Reason, RedFlag,
};

use crate::error::EngineError;
use crate::resolve::resolve_condition;
use crate::state::{CompletedState, Cursor, EngineState, QuestionView};

/// Likelihood added when an answer opens a condition for investigation.
pub const RULE_OUT_DELTA: i16 = 10;
/// Likelihood added or removed by `increase_likelihood` / `decrease_likelihood`.
pub const LIKELIHOOD_DELTA: i16 = 15;
/// Number of ranked conditions reported after the primary suspicion.
pub const DIFFERENTIAL_COUNT: usize = 3;

/// Start an assessment over a region's rule document.
///
/// Every condition starts active at likelihood 50. A document with repeated
/// condition names, repeated question IDs, or blank question IDs is rejected.
pub fn initialize(rules: impl Into<Arc<RuleDocument>>) -> Result<EngineState, EngineError> {
    let rules = rules.into();
    validate(&rules)?;

    let condition_states: BTreeMap<String, ConditionState> = rules
        .conditions
        .iter()
        .map(|c| (c.name.clone(), ConditionState::open()))
        .collect();

    let mut state = EngineState {
        rules,
        asked_questions: Vec::new(),
        condition_states,
        red_flags: Vec::new(),
        cursor: Cursor::default(),
        pending_branch: None,
        is_complete: false,
        completion_reason: None,
    };
    advance(&mut state);

    info!(
        region = %state.rules.region,
        conditions = state.rules.conditions.len(),
        questions = state.rules.question_count(),
        "assessment initialized"
    );
    Ok(state)
}

/// The next question to ask, or `None` once every question has been answered.
pub fn current_question(state: &EngineState) -> Option<QuestionView> {
    let (condition_index, question) = next_unasked(state)?;
    let answered_count = state.asked_questions.len();
    Some(QuestionView {
        question: question.clone(),
        condition_name: state.rules.conditions[condition_index].name.clone(),
        answered_count,
        remaining_count: state.rules.question_count().saturating_sub(answered_count),
    })
}

/// Apply an answer, returning the new state.
///
/// A value matching no option (case-sensitively, then case-insensitively) is
/// still logged, with empty effects. Unresolvable condition names in the
/// effects are logged and skipped.
pub fn answer(state: &EngineState, question_id: &str, value: &str) -> Result<EngineState, EngineError> {
    apply(state.clone(), question_id, value, Timestamp::now())
}

/// Step back one answer by replaying every earlier answer from scratch.
pub fn undo(state: &EngineState) -> Result<EngineState, EngineError> {
    let keep = state.asked_questions.len().saturating_sub(1);
    replay(Arc::clone(&state.rules), &state.asked_questions[..keep])
}

/// Rebuild a state from a persisted answer log. Replayed entries keep their
/// original timestamps, so the rebuilt log equals `log`.
pub fn replay(
    rules: impl Into<Arc<RuleDocument>>,
    log: &[AskedQuestion],
) -> Result<EngineState, EngineError> {
    let mut state = initialize(rules)?;
    for entry in log {
        state = apply(state, &entry.question_id, &entry.answer, entry.timestamp)?;
    }
    Ok(state)
}

/// Finalize the assessment: conditions with a non-zero likelihood, ranked.
pub fn complete(state: &EngineState) -> CompletedState {
    let mut ranked = state
        .ranked()
        .into_iter()
        .filter(|c| c.state.likelihood > 0);
    let primary_suspicion = ranked.next();
    let differential_diagnoses = ranked.take(DIFFERENTIAL_COUNT).collect();

    let completion_reason = state
        .completion_reason
        .unwrap_or(CompletionReason::ClinicianFinalized);

    info!(
        region = %state.rules.region,
        answered = state.asked_questions.len(),
        red_flags = state.red_flags.len(),
        primary = primary_suspicion.as_ref().map(|c| c.name.as_str()).unwrap_or("none"),
        "assessment completed"
    );

    CompletedState {
        completion_reason,
        primary_suspicion,
        differential_diagnoses,
        trace: trace(state),
    }
}

/// The review artifact: answer log, red flags, and every condition ranked.
pub fn trace(state: &EngineState) -> AssessmentTrace {
    AssessmentTrace {
        region: state.rules.region.clone(),
        asked_questions: state.asked_questions.clone(),
        red_flags: state.red_flags.clone(),
        ranked_conditions: state.ranked(),
    }
}

/// Flatten the answer log into symptom observations for weighted matching.
/// Yes/no answers become flags.
pub fn symptoms(state: &EngineState) -> Vec<Symptom> {
    state
        .asked_questions
        .iter()
        .filter(|asked| !asked.category.is_empty())
        .map(|asked| Symptom {
            category: asked.category.clone(),
            response: SymptomValue::from_answer(&asked.answer),
        })
        .collect()
}

fn validate(rules: &RuleDocument) -> Result<(), EngineError> {
    let mut names = HashSet::new();
    let mut ids = HashSet::new();
    for condition in &rules.conditions {
        if !names.insert(condition.name.as_str()) {
            return Err(EngineError::InvalidRuleDocument(format!(
                "condition '{}' is declared more than once",
                condition.name
            )));
        }
        for question in &condition.questions {
            if question.id.trim().is_empty() {
                return Err(EngineError::InvalidRuleDocument(format!(
                    "condition '{}' has a question without an id",
                    condition.name
                )));
            }
            if !ids.insert(question.id.as_str()) {
                return Err(EngineError::InvalidRuleDocument(format!(
                    "question id '{}' is used more than once",
                    question.id
                )));
            }
        }
    }
    Ok(())
}

fn apply(
    mut state: EngineState,
    question_id: &str,
    value: &str,
    timestamp: Timestamp,
) -> Result<EngineState, EngineError> {
    let rules = Arc::clone(&state.rules);
    let (condition_index, question_index) = rules
        .find_question(question_id)
        .ok_or_else(|| EngineError::UnknownQuestion(question_id.to_string()))?;
    if state.is_asked(question_id) {
        return Err(EngineError::QuestionAlreadyAnswered(question_id.to_string()));
    }

    let condition = &rules.conditions[condition_index];
    let question = &condition.questions[question_index];
    let effects = match select_option(question, value) {
        Some(option) => option.effects.clone(),
        None => {
            warn!(question_id, value, "answer matches no option, applying no effects");
            Effects::default()
        }
    };

    state.asked_questions.push(AskedQuestion {
        question_id: question.id.clone(),
        question_text: question.text.clone(),
        category: question.category.clone(),
        condition_name: condition.name.clone(),
        answer: value.to_string(),
        effects: effects.clone(),
        timestamp,
    });

    let reason = Reason {
        question_id: question.id.clone(),
        question: question.text.clone(),
        answer: value.to_string(),
    };

    // Rule-out opens a condition for deeper investigation; it never excludes.
    for name in &effects.rule_out {
        if let Some(target) = resolved_state(&mut state, &rules, name, "rule_out") {
            target.active = true;
            target.rule_out_reasons.push(reason.clone());
            target.adjust_likelihood(RULE_OUT_DELTA);
        }
    }
    for name in &effects.increase_likelihood {
        if let Some(target) = resolved_state(&mut state, &rules, name, "increase_likelihood") {
            target.confirmation_reasons.push(reason.clone());
            target.adjust_likelihood(LIKELIHOOD_DELTA);
        }
    }
    // Decreases record no reason.
    for name in &effects.decrease_likelihood {
        if let Some(target) = resolved_state(&mut state, &rules, name, "decrease_likelihood") {
            target.adjust_likelihood(-LIKELIHOOD_DELTA);
        }
    }

    if effects.red_flag {
        warn!(question_id, red_flag = effects.red_flag_text.as_deref().unwrap_or(""), "red flag raised");
        state.red_flags.push(RedFlag {
            question: question.text.clone(),
            answer: value.to_string(),
            red_flag_text: effects.red_flag_text.clone(),
            timestamp,
        });
    }

    state.pending_branch = effects.next_question_id.as_deref().and_then(|target| {
        if rules.find_question(target).is_none() {
            warn!(question_id, target, "branch target does not exist, ignoring");
            None
        } else if state.is_asked(target) {
            None
        } else {
            Some(target.to_string())
        }
    });

    advance(&mut state);
    debug!(
        question_id,
        value,
        answered = state.asked_questions.len(),
        complete = state.is_complete,
        "answer applied"
    );
    Ok(state)
}

fn resolved_state<'s>(
    state: &'s mut EngineState,
    rules: &RuleDocument,
    name: &str,
    effect: &str,
) -> Option<&'s mut ConditionState> {
    match resolve_condition(&rules.conditions, name) {
        Some(index) => state.condition_states.get_mut(&rules.conditions[index].name),
        None => {
            warn!(region = %rules.region, condition = name, effect, "unresolvable condition reference, skipping");
            None
        }
    }
}

fn select_option<'q>(question: &'q Question, value: &str) -> Option<&'q AnswerOption> {
    question
        .options
        .iter()
        .find(|option| option.value == value)
        .or_else(|| {
            let lowered = value.to_lowercase();
            question
                .options
                .iter()
                .find(|option| option.value.to_lowercase() == lowered)
        })
}

/// Move the cursor onto the first unasked question at or after it, and mark
/// the assessment complete when nothing is left to ask.
fn advance(state: &mut EngineState) {
    state.cursor = scan_from(state, state.cursor)
        .map(|(cursor, _)| cursor)
        .unwrap_or(Cursor {
            condition_index: state.rules.conditions.len(),
            question_index: 0,
        });

    if next_unasked(state).is_none() && !state.is_complete {
        state.is_complete = true;
        state.completion_reason = Some(CompletionReason::AllQuestionsAnswered);
        info!(region = %state.rules.region, answered = state.asked_questions.len(), "all questions answered");
    }
}

/// The pending branch target if still unasked, otherwise the cursor scan.
fn next_unasked(state: &EngineState) -> Option<(usize, &Question)> {
    if let Some(target) = state.pending_branch.as_deref()
        && !state.is_asked(target)
        && let Some((ci, qi)) = state.rules.find_question(target)
    {
        return Some((ci, &state.rules.conditions[ci].questions[qi]));
    }
    scan_from(state, state.cursor).map(|(cursor, question)| (cursor.condition_index, question))
}

fn scan_from(state: &EngineState, start: Cursor) -> Option<(Cursor, &Question)> {
    let mut cursor = start;
    while cursor.condition_index < state.rules.conditions.len() {
        match state
            .rules
            .question_at(cursor.condition_index, cursor.question_index)
        {
            Some(question) if !state.is_asked(&question.id) => return Some((cursor, question)),
            Some(_) => cursor.question_index += 1,
            None => {
                cursor.condition_index += 1;
                cursor.question_index = 0;
            }
        }
    }
    None
}
