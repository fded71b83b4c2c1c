use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use triage_core::models::symptom::Symptom;
use triage_patterns::all_patterns;
use triage_patterns::matching::{diagnose, DiagnosisOptions, DiagnosisReport};

use crate::error::ApiError;
use crate::routes::assessments::session;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct DiagnoseRequest {
    symptoms: Vec<Symptom>,
    /// Overrides the server's configured options.
    #[serde(default)]
    options: Option<DiagnosisOptions>,
}

/// Weighted matching over the symptoms an assessment has collected so far.
pub async fn diagnose_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DiagnosisReport>, ApiError> {
    let symptoms = {
        let mut sessions = state.assessments.lock().await;
        triage_questions::symptoms(session(&mut sessions, id)?)
    };
    Ok(Json(diagnose(&symptoms, &all_patterns(), &state.diagnosis)))
}

pub async fn diagnose_symptoms(
    State(state): State<AppState>,
    Json(req): Json<DiagnoseRequest>,
) -> Json<DiagnosisReport> {
    let options = req.options.unwrap_or(state.diagnosis);
    Json(diagnose(&req.symptoms, &all_patterns(), &options))
}
