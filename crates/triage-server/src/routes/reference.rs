use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use triage_patterns::pattern::{PatternEntry, SeverityRange};
use triage_patterns::{all_patterns, get_pattern};
use triage_storage::documents;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummary {
    region: String,
    has_guided_flow: bool,
}

#[derive(Serialize)]
pub struct PatternSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternDetail {
    id: String,
    name: String,
    entries: Vec<PatternEntry>,
    severity_ranges: Vec<SeverityRange>,
}

pub async fn list_regions(
    State(state): State<AppState>,
) -> Result<Json<Vec<RegionSummary>>, ApiError> {
    let regions = documents::list_regions(&state.data_dir)
        .await?
        .into_iter()
        .map(|region| RegionSummary {
            has_guided_flow: state.graphs.regions().any(|r| r == region),
            region,
        })
        .collect();
    Ok(Json(regions))
}

pub async fn list_patterns() -> Json<Vec<PatternSummary>> {
    let patterns = all_patterns()
        .iter()
        .map(|p| PatternSummary {
            id: p.id().to_string(),
            name: p.name().to_string(),
        })
        .collect();
    Json(patterns)
}

pub async fn get_pattern_detail(Path(id): Path<String>) -> Result<Json<PatternDetail>, ApiError> {
    let pattern = get_pattern(&id)?;

    Ok(Json(PatternDetail {
        id: pattern.id().to_string(),
        name: pattern.name().to_string(),
        entries: pattern.entries().to_vec(),
        severity_ranges: pattern.severity_ranges().to_vec(),
    }))
}
