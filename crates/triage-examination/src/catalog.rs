use std::collections::BTreeMap;
use std::sync::Arc;

use triage_core::models::graph::DecisionGraph;

/// Where the guided test engine looks up a region's decision graph.
pub trait GraphSource: Send + Sync {
    fn graph_for(&self, region: &str) -> Option<Arc<DecisionGraph>>;
}

/// Decision graphs keyed by region.
#[derive(Debug, Clone, Default)]
pub struct GraphCatalog {
    graphs: BTreeMap<String, Arc<DecisionGraph>>,
}

impl GraphCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, region: impl Into<String>, graph: DecisionGraph) {
        self.graphs.insert(region.into(), Arc::new(graph));
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.graphs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}

impl GraphSource for GraphCatalog {
    fn graph_for(&self, region: &str) -> Option<Arc<DecisionGraph>> {
        self.graphs.get(region).cloned()
    }
}
