use std::fs;
use std::path::Path;

use triage_examination::GraphSource;
use triage_storage::documents::{
    list_regions, load_decision_graph, load_graph_catalog, load_rule_document,
};
use triage_storage::error::StorageError;

const LUMBAR_RULES: &str = r#"{
    "region": "lumbar",
    "title": "Lumbar Spine",
    "conditions": [{
        "name": "Lumbar Disc Herniation",
        "questions": [{
            "id": "q1",
            "question": "Do you have leg pain radiating below the knee?",
            "category": "radiating_pain",
            "options": [{"value": "Yes", "effects": {"increase_likelihood": ["Lumbar Disc Herniation"]}}]
        }]
    }]
}"#;

const LUMBAR_GRAPH: &str = r#"{
    "startNode": "slr",
    "nodes": {
        "slr": {"id": "slr", "name": "Straight Leg Raise", "instruction": "", "onPositive": "disc", "onNegative": "elsewhere"},
        "disc": {"id": "disc", "isTerminal": true, "diagnosisMapping": "Lumbar Disc Herniation"}
    }
}"#;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn data_dir() -> tempfile::TempDir {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "rules/lumbar.json", LUMBAR_RULES);
    write(tmp.path(), "rules/cervical.json", r#"{"region": "cervical", "conditions": []}"#);
    write(tmp.path(), "rules/notes.txt", "not a document");
    write(tmp.path(), "graphs/lumbar.json", LUMBAR_GRAPH);
    tmp
}

#[tokio::test]
async fn loads_rule_document_by_region() {
    let tmp = data_dir();
    let document = load_rule_document(tmp.path(), "lumbar").await.unwrap();
    assert_eq!(document.title, "Lumbar Spine");
    assert_eq!(document.question_count(), 1);
}

#[tokio::test]
async fn missing_region_is_not_found() {
    let tmp = data_dir();
    let err = load_rule_document(tmp.path(), "hip").await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));

    let err = load_decision_graph(tmp.path(), "cervical").await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[tokio::test]
async fn traversal_in_region_name_is_refused() {
    let tmp = data_dir();
    let err = load_rule_document(tmp.path(), "../rules/lumbar").await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[tokio::test]
async fn malformed_documents_are_invalid() {
    let tmp = data_dir();
    write(tmp.path(), "rules/knee.json", r#"{"region": "knee", "title": "Knee"}"#);
    write(tmp.path(), "graphs/knee.json", r#"{"startNode": "x", "nodes": {}}"#);

    let err = load_rule_document(tmp.path(), "knee").await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidDocument { .. }));

    let err = load_decision_graph(tmp.path(), "knee").await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidDocument { .. }));
}

#[tokio::test]
async fn lists_regions_with_rule_documents() {
    let tmp = data_dir();
    assert_eq!(list_regions(tmp.path()).await.unwrap(), vec!["cervical", "lumbar"]);

    let empty = tempfile::tempdir().unwrap();
    assert!(list_regions(empty.path()).await.unwrap().is_empty());
}

#[tokio::test]
async fn catalog_holds_every_graph() {
    let tmp = data_dir();
    let catalog = load_graph_catalog(tmp.path()).await.unwrap();

    assert_eq!(catalog.regions().collect::<Vec<_>>(), vec!["lumbar"]);
    let graph = catalog.graph_for("lumbar").unwrap();
    assert_eq!(graph.start_node, "slr");
    assert!(catalog.graph_for("cervical").is_none());
}
