use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use triage_examination::{GraphCatalog, TestState};
use triage_patterns::matching::DiagnosisOptions;
use triage_questions::EngineState;
use triage_storage::documents;

use crate::config::ServerConfig;
use crate::sessions::Sessions;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub graphs: Arc<GraphCatalog>,
    pub diagnosis: DiagnosisOptions,
    /// Held in memory only; idle sessions expire after the configured TTL.
    pub assessments: Arc<Mutex<Sessions<EngineState>>>,
    /// Keyed by the assessment the examination refines.
    pub examinations: Arc<Mutex<Sessions<TestState>>>,
}

impl AppState {
    pub fn new(
        data_dir: PathBuf,
        graphs: GraphCatalog,
        diagnosis: DiagnosisOptions,
        session_ttl: Duration,
    ) -> Self {
        Self {
            data_dir,
            graphs: Arc::new(graphs),
            diagnosis,
            assessments: Arc::new(Mutex::new(Sessions::new(session_ttl))),
            examinations: Arc::new(Mutex::new(Sessions::new(session_ttl))),
        }
    }

    /// Load the decision-graph catalog from the configured data directory.
    pub async fn load(config: &ServerConfig) -> eyre::Result<Self> {
        let graphs = documents::load_graph_catalog(&config.data_dir).await?;
        Ok(Self::new(
            config.data_dir.clone(),
            graphs,
            config.diagnosis,
            config.session_ttl,
        ))
    }
}
