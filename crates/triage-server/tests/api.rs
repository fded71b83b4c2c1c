use std::fs;
use std::path::Path;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use triage_patterns::matching::DiagnosisOptions;
use triage_server::config::{ServerConfig, DEFAULT_SESSION_TTL};
use triage_server::state::AppState;

const LUMBAR_RULES: &str = r#"{
    "region": "lumbar",
    "title": "Lumbar Spine",
    "conditions": [
        {
            "name": "Lumbar Disc Herniation",
            "questions": [
                {
                    "id": "q1",
                    "question": "Do you have leg pain radiating below the knee?",
                    "category": "radiating_pain",
                    "options": [
                        {"value": "Yes", "effects": {"increase_likelihood": ["Lumbar Disc Herniation"]}},
                        {"value": "No", "effects": {"decrease_likelihood": ["Lumbar Disc Herniation"]}}
                    ]
                },
                {
                    "id": "q2",
                    "question": "Any numbness in the saddle area?",
                    "category": "saddle_anaesthesia",
                    "options": [
                        {"value": "Yes", "effects": {"red_flag": true, "red_flag_text": "Possible Cauda Equina"}},
                        {"value": "No", "effects": {}}
                    ]
                }
            ]
        },
        {
            "name": "Lumbar Spinal Stenosis",
            "questions": [{
                "id": "q3",
                "question": "Does walking bring on leg pain that eases when you sit?",
                "category": "neurogenic_claudication",
                "options": [
                    {"value": "Yes", "effects": {"increase_likelihood": ["stenosis"]}},
                    {"value": "No", "effects": {}}
                ]
            }]
        }
    ]
}"#;

const LUMBAR_GRAPH: &str = r#"{
    "startNode": "slr",
    "nodes": {
        "slr": {"id": "slr", "name": "Straight Leg Raise", "instruction": "Raise the extended leg.", "onPositive": "disc", "onNegative": "slump"},
        "slump": {"id": "slump", "name": "Slump Test", "instruction": "Seated slump.", "onPositive": "disc"},
        "disc": {"id": "disc", "isTerminal": true, "diagnosisMapping": "Lumbar Disc Herniation"}
    }
}"#;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

async fn app(data_dir: &Path) -> Router {
    write(data_dir, "rules/lumbar.json", LUMBAR_RULES);
    write(data_dir, "rules/knee.json", r#"{"region": "knee"}"#);
    write(data_dir, "graphs/lumbar.json", LUMBAR_GRAPH);

    let config = ServerConfig {
        data_dir: data_dir.to_path_buf(),
        bind_addr: "127.0.0.1:0".to_string(),
        diagnosis: DiagnosisOptions::default(),
        session_ttl: DEFAULT_SESSION_TTL,
    };
    triage_server::router(AppState::load(&config).await.unwrap())
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app(tmp.path()).await;
    let (status, body) = call(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn lists_regions_and_patterns() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app(tmp.path()).await;

    let (status, body) = call(&app, "GET", "/regions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"region": "knee", "hasGuidedFlow": false},
            {"region": "lumbar", "hasGuidedFlow": true}
        ])
    );

    let (_, body) = call(&app, "GET", "/patterns", None).await;
    assert_eq!(body.as_array().unwrap().len(), 8);

    let (status, body) = call(&app, "GET", "/patterns/plantar_fasciitis", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Plantar Fasciitis");

    let (status, _) = call(&app, "GET", "/patterns/gout", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn assessment_flow_from_creation_to_completion() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app(tmp.path()).await;

    let (status, body) = call(&app, "POST", "/assessments", Some(json!({"region": "lumbar"}))).await;
    assert_eq!(status, StatusCode::OK);
    let id = body["assessmentId"].as_str().unwrap().to_string();
    assert_eq!(body["currentQuestion"]["question"]["id"], "q1");
    assert_eq!(body["currentQuestion"]["remainingCount"], 3);

    let answers = format!("/assessments/{id}/answers");
    let (status, body) = call(&app, "POST", &answers, Some(json!({"questionId": "q1", "value": "Yes"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentQuestion"]["question"]["id"], "q2");

    let (_, body) = call(&app, "POST", &answers, Some(json!({"questionId": "q2", "value": "Yes"}))).await;
    assert_eq!(body["redFlags"][0]["redFlagText"], "Possible Cauda Equina");

    let (status, body) = call(&app, "POST", &answers, Some(json!({"questionId": "q3", "value": "Yes"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isComplete"], true);
    assert_eq!(body["completionReason"], "all_questions_answered");
    assert!(body["currentQuestion"].is_null());

    let (_, trace) = call(&app, "GET", &format!("/assessments/{id}/trace"), None).await;
    assert_eq!(trace["askedQuestions"].as_array().unwrap().len(), 3);

    let (status, completed) = call(&app, "POST", &format!("/assessments/{id}/complete"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(completed["primarySuspicion"]["name"], "Lumbar Disc Herniation");
    assert_eq!(completed["primarySuspicion"]["likelihood"], 65);
    assert_eq!(completed["differentialDiagnoses"][0]["name"], "Lumbar Spinal Stenosis");

    let (_, report) = call(&app, "GET", &format!("/assessments/{id}/diagnosis"), None).await;
    assert_eq!(report["status"], "diagnosed");
    assert_eq!(report["primaryDiagnosis"]["conditionId"], "lumbar_disc_herniation");
}

#[tokio::test]
async fn protocol_errors_map_to_client_statuses() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app(tmp.path()).await;

    let (_, body) = call(&app, "POST", "/assessments", Some(json!({"region": "lumbar"}))).await;
    let id = body["assessmentId"].as_str().unwrap().to_string();
    let answers = format!("/assessments/{id}/answers");

    call(&app, "POST", &answers, Some(json!({"questionId": "q1", "value": "No"}))).await;
    let (status, body) = call(&app, "POST", &answers, Some(json!({"questionId": "q1", "value": "Yes"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("q1"));

    let (status, _) = call(&app, "POST", &answers, Some(json!({"questionId": "q9", "value": "Yes"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call(&app, "POST", &format!("/assessments/{id}/undo"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentQuestion"]["question"]["id"], "q1");

    let missing = uuid::Uuid::new_v4();
    let (status, _) = call(&app, "GET", &format!("/assessments/{missing}/question"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, "POST", "/assessments", Some(json!({"region": "hip"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, "POST", "/assessments", Some(json!({"region": "knee"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn posted_symptoms_are_matched() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app(tmp.path()).await;

    let (status, body) = call(
        &app,
        "POST",
        "/diagnosis",
        Some(json!({"symptoms": [{"category": "radiating_pain", "response": "Yes"}]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["primaryDiagnosis"]["conditionId"], "lumbar_disc_herniation");

    let (_, body) = call(&app, "POST", "/diagnosis", Some(json!({"symptoms": []}))).await;
    assert_eq!(body["status"], "insufficient_data");
}

#[tokio::test]
async fn guided_examination_flow() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app(tmp.path()).await;
    let assessment_id = uuid::Uuid::new_v4();

    let (status, body) = call(
        &app,
        "POST",
        "/examinations",
        Some(json!({"assessmentId": assessment_id, "region": "lumbar"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentTest"]["id"], "slr");

    let results = format!("/examinations/{assessment_id}/results");
    let (status, _) = call(&app, "POST", &results, Some(json!({"testId": "slump", "result": "positive"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = call(&app, "POST", &results, Some(json!({"testId": "slr", "result": "negative"}))).await;
    assert_eq!(body["currentTest"]["id"], "slump");

    let (_, body) = call(
        &app,
        "POST",
        &results,
        Some(json!({"testId": "slump", "result": "positive", "notes": "reproduced leg pain"})),
    )
    .await;
    assert_eq!(body["isComplete"], true);

    let (_, summary) = call(&app, "GET", &format!("/examinations/{assessment_id}/summary"), None).await;
    assert_eq!(summary["finalSuspectedCondition"], "Lumbar Disc Herniation");
    assert_eq!(summary["pathTaken"], json!(["Straight Leg Raise (negative)", "Slump Test (positive)"]));
}

#[tokio::test]
async fn region_without_graph_has_no_guided_flow() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app(tmp.path()).await;

    let (status, body) = call(&app, "POST", "/examinations", Some(json!({"region": "knee"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hasGuidedFlow"], false);
    assert!(body["currentTest"].is_null());

    let id = body["assessmentId"].as_str().unwrap().to_string();
    let (status, _) = call(
        &app,
        "POST",
        &format!("/examinations/{id}/results"),
        Some(json!({"testId": "anything", "result": "positive"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}
