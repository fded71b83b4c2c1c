use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A per-region decision graph of clinical examination tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DecisionGraph {
    pub start_node: String,
    pub nodes: BTreeMap<String, GraphNode>,
}

/// Either an examination step with positive/negative edges, or a terminal node
/// carrying the concluding diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GraphNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub instruction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_positive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_negative: Option<String>,
    #[serde(default)]
    pub is_terminal: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis_mapping: Option<String>,
}

impl DecisionGraph {
    /// Parse and validate a decision graph.
    ///
    /// Nodes without an `id` take their map key. Edges pointing at nodes that
    /// do not exist are accepted here; the guided test flow ends when it
    /// reaches one.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let graph: DecisionGraph = serde_json::from_str(json)?;
        graph.normalized()
    }

    pub fn normalized(mut self) -> Result<Self, CoreError> {
        for (key, node) in self.nodes.iter_mut() {
            if node.id.is_empty() {
                node.id = key.clone();
            } else if node.id != *key {
                return Err(CoreError::InvalidDecisionGraph(format!(
                    "node keyed '{key}' declares id '{}'",
                    node.id
                )));
            }
        }

        if !self.nodes.contains_key(&self.start_node) {
            return Err(CoreError::InvalidDecisionGraph(format!(
                "start node '{}' is not defined",
                self.start_node
            )));
        }

        Ok(self)
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    /// Edge targets that name no node in the graph.
    pub fn dangling_edges(&self) -> Vec<(&str, &str)> {
        let nodes = &self.nodes;
        nodes
            .values()
            .flat_map(move |node| {
                [node.on_positive.as_deref(), node.on_negative.as_deref()]
                    .into_iter()
                    .flatten()
                    .filter(move |target| !nodes.contains_key(*target))
                    .map(move |target| (node.id.as_str(), target))
            })
            .collect()
    }
}
