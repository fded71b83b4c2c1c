use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use triage_core::models::graph::GraphNode;
use triage_examination::{RefinedDiagnosis, TestResult, TestState};

use crate::error::ApiError;
use crate::sessions::Sessions;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartExaminationRequest {
    /// The assessment this examination refines. A fresh id is issued when absent.
    #[serde(default)]
    assessment_id: Option<Uuid>,
    region: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResultRequest {
    test_id: String,
    result: TestResult,
    #[serde(default)]
    notes: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExaminationProgress {
    assessment_id: Uuid,
    region: String,
    has_guided_flow: bool,
    is_complete: bool,
    current_test: Option<GraphNode>,
    completed_count: usize,
}

impl ExaminationProgress {
    fn of(exam: &TestState) -> Self {
        Self {
            assessment_id: exam.assessment_id(),
            region: exam.region().to_string(),
            has_guided_flow: exam.has_guided_flow(),
            is_complete: exam.is_complete(),
            current_test: triage_examination::current_test(exam).cloned(),
            completed_count: exam.completed_tests().len(),
        }
    }
}

/// Start (or restart) the guided examination for an assessment.
pub async fn start_examination(
    State(state): State<AppState>,
    Json(req): Json<StartExaminationRequest>,
) -> Json<ExaminationProgress> {
    let id = req.assessment_id.unwrap_or_else(Uuid::new_v4);
    let exam = triage_examination::initialize(id, &req.region, state.graphs.as_ref());
    let progress = ExaminationProgress::of(&exam);

    if state.examinations.lock().await.insert(id, exam).is_some() {
        tracing::info!(assessment_id = %id, "examination restarted");
    }
    Json(progress)
}

pub async fn current_test(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExaminationProgress>, ApiError> {
    let mut exams = state.examinations.lock().await;
    Ok(Json(ExaminationProgress::of(examination(&mut exams, id)?)))
}

pub async fn record_result(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RecordResultRequest>,
) -> Result<Json<ExaminationProgress>, ApiError> {
    let mut exams = state.examinations.lock().await;
    let next = triage_examination::record_result(
        examination(&mut exams, id)?,
        &req.test_id,
        req.result,
        req.notes,
    )?;
    let progress = ExaminationProgress::of(&next);
    exams.insert(id, next);
    Ok(Json(progress))
}

pub async fn get_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RefinedDiagnosis>, ApiError> {
    let mut exams = state.examinations.lock().await;
    Ok(Json(triage_examination::summarize(examination(&mut exams, id)?)))
}

fn examination(exams: &mut Sessions<TestState>, id: Uuid) -> Result<&TestState, ApiError> {
    exams
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("examination not found: {id}")))
}
