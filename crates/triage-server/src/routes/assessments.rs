use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use triage_core::models::trace::{AssessmentTrace, CompletionReason, RedFlag};
use triage_questions::{CompletedState, EngineState, QuestionView};
use triage_storage::documents;

use crate::error::ApiError;
use crate::sessions::Sessions;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateAssessmentRequest {
    region: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    question_id: String,
    value: String,
}

/// Where an assessment stands after a transition.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentProgress {
    assessment_id: Uuid,
    region: String,
    is_complete: bool,
    completion_reason: Option<CompletionReason>,
    current_question: Option<QuestionView>,
    red_flags: Vec<RedFlag>,
}

impl AssessmentProgress {
    fn of(assessment_id: Uuid, engine: &EngineState) -> Self {
        Self {
            assessment_id,
            region: engine.region().to_string(),
            is_complete: engine.is_complete(),
            completion_reason: engine.completion_reason(),
            current_question: triage_questions::current_question(engine),
            red_flags: engine.red_flags().to_vec(),
        }
    }
}

pub async fn create_assessment(
    State(state): State<AppState>,
    Json(req): Json<CreateAssessmentRequest>,
) -> Result<Json<AssessmentProgress>, ApiError> {
    let rules = documents::load_rule_document(&state.data_dir, &req.region).await?;
    let engine = triage_questions::initialize(rules)?;

    let id = Uuid::new_v4();
    let progress = AssessmentProgress::of(id, &engine);
    state.assessments.lock().await.insert(id, engine);
    tracing::info!(assessment_id = %id, region = %req.region, "assessment created");
    Ok(Json(progress))
}

pub async fn current_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentProgress>, ApiError> {
    let mut sessions = state.assessments.lock().await;
    let engine = session(&mut sessions, id)?;
    Ok(Json(AssessmentProgress::of(id, engine)))
}

pub async fn submit_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<AssessmentProgress>, ApiError> {
    let mut sessions = state.assessments.lock().await;
    let next = triage_questions::answer(session(&mut sessions, id)?, &req.question_id, &req.value)?;
    let progress = AssessmentProgress::of(id, &next);
    sessions.insert(id, next);
    Ok(Json(progress))
}

pub async fn undo_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentProgress>, ApiError> {
    let mut sessions = state.assessments.lock().await;
    let previous = triage_questions::undo(session(&mut sessions, id)?)?;
    let progress = AssessmentProgress::of(id, &previous);
    sessions.insert(id, previous);
    Ok(Json(progress))
}

pub async fn get_trace(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentTrace>, ApiError> {
    let mut sessions = state.assessments.lock().await;
    Ok(Json(triage_questions::trace(session(&mut sessions, id)?)))
}

pub async fn complete_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CompletedState>, ApiError> {
    let mut sessions = state.assessments.lock().await;
    Ok(Json(triage_questions::complete(session(&mut sessions, id)?)))
}

pub(crate) fn session(
    sessions: &mut Sessions<EngineState>,
    id: Uuid,
) -> Result<&EngineState, ApiError> {
    sessions
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("assessment not found: {id}")))
}
