use std::path::{Path, PathBuf};

use tracing::{info, warn};

use triage_core::models::graph::DecisionGraph;
use triage_core::models::rules::RuleDocument;
use triage_core::paths;
use triage_examination::GraphCatalog;

use crate::error::StorageError;
use crate::files;

/// Load a region's rule document from `{data_dir}/rules/{region}.json`.
pub async fn load_rule_document(data_dir: &Path, region: &str) -> Result<RuleDocument, StorageError> {
    let path = region_path(data_dir, region, paths::rule_document)?;
    let text = files::read_text(&path).await?;
    let document = RuleDocument::from_json(&text).map_err(|source| StorageError::InvalidDocument {
        path: path.clone(),
        source,
    })?;

    if document.region != region {
        warn!(path = %path.display(), declared = %document.region, region, "rule document declares a different region");
    }
    info!(region, conditions = document.conditions.len(), "rule document loaded");
    Ok(document)
}

/// Load a region's decision graph from `{data_dir}/graphs/{region}.json`.
pub async fn load_decision_graph(data_dir: &Path, region: &str) -> Result<DecisionGraph, StorageError> {
    let path = region_path(data_dir, region, paths::decision_graph)?;
    let text = files::read_text(&path).await?;
    let graph = DecisionGraph::from_json(&text).map_err(|source| StorageError::InvalidDocument {
        path: path.clone(),
        source,
    })?;

    for (from, to) in graph.dangling_edges() {
        warn!(region, from, to, "decision graph edge leads to an undefined node");
    }
    Ok(graph)
}

/// Load every decision graph in the data directory.
///
/// Any malformed graph fails the whole load.
pub async fn load_graph_catalog(data_dir: &Path) -> Result<GraphCatalog, StorageError> {
    let mut catalog = GraphCatalog::new();
    for region in regions_in(&data_dir.join(paths::GRAPHS_DIR)).await? {
        let graph = load_decision_graph(data_dir, &region).await?;
        catalog.insert(region, graph);
    }
    info!(graphs = catalog.len(), dir = %data_dir.display(), "decision graph catalog loaded");
    Ok(catalog)
}

/// Regions that have a rule document, sorted.
pub async fn list_regions(data_dir: &Path) -> Result<Vec<String>, StorageError> {
    regions_in(&data_dir.join(paths::RULES_DIR)).await
}

async fn regions_in(dir: &Path) -> Result<Vec<String>, StorageError> {
    let regions = files::list_json_files(dir)
        .await?
        .iter()
        .filter_map(|path| path.file_name()?.to_str())
        .filter_map(paths::region_from_file_name)
        .map(str::to_string)
        .collect();
    Ok(regions)
}

fn region_path(
    data_dir: &Path,
    region: &str,
    relative: fn(&str) -> String,
) -> Result<PathBuf, StorageError> {
    let path = data_dir.join(relative(region));
    if paths::is_valid_region(region) {
        Ok(path)
    } else {
        Err(StorageError::NotFound { path })
    }
}
