//! triage-server
//!
//! HTTP host for the triage engines. Sessions live in memory, are replaced
//! wholesale on every transition, and expire once idle; nothing is persisted
//! here.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod sessions;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Reference data
        .route("/regions", get(routes::reference::list_regions))
        .route("/patterns", get(routes::reference::list_patterns))
        .route("/patterns/{id}", get(routes::reference::get_pattern_detail))
        // Question flow
        .route("/assessments", post(routes::assessments::create_assessment))
        .route(
            "/assessments/{id}/question",
            get(routes::assessments::current_question),
        )
        .route(
            "/assessments/{id}/answers",
            post(routes::assessments::submit_answer),
        )
        .route("/assessments/{id}/undo", post(routes::assessments::undo_answer))
        .route("/assessments/{id}/trace", get(routes::assessments::get_trace))
        .route(
            "/assessments/{id}/complete",
            post(routes::assessments::complete_assessment),
        )
        .route(
            "/assessments/{id}/diagnosis",
            get(routes::diagnosis::diagnose_assessment),
        )
        // Weighted matching over arbitrary symptoms
        .route("/diagnosis", post(routes::diagnosis::diagnose_symptoms))
        // Guided examination
        .route("/examinations", post(routes::examinations::start_examination))
        .route(
            "/examinations/{id}/test",
            get(routes::examinations::current_test),
        )
        .route(
            "/examinations/{id}/results",
            post(routes::examinations::record_result),
        )
        .route(
            "/examinations/{id}/summary",
            get(routes::examinations::get_summary),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
