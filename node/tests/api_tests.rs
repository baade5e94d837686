use axum::body::Body;
use axum::http::{Request, StatusCode};
use credence_kernel::store::MemoryStore;
use credence_node::engine::Engine;
use credence_node::server::build_router;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::util::ServiceExt;

fn test_router() -> axum::Router {
    let engine = Engine::with_store(Box::new(MemoryStore::new()));
    build_router(Arc::new(Mutex::new(engine)))
}

async fn post_json(
    app: &axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let app = test_router();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_invoke_query_round_trip() {
    let app = test_router();

    let (status, _) = post_json(&app, "/init", json!({ "args": ["genesis"] })).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post_json(
        &app,
        "/invoke",
        json!({
            "function": "addToDegreesCompleted",
            "args": ["G1", "10", "500", "BSc", "2020", "75", "101", "A", "Regular"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payload"]["DegreeName"], "BSc");

    let (status, body) = post_json(
        &app,
        "/invoke",
        json!({
            "function": "addAppliedDegree",
            "args": ["G1", "10", "MSc", "BSc", "10"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payload"]["Approved"], 1);

    let (status, body) = post_json(
        &app,
        "/query",
        json!({ "function": "read", "args": ["G1_2"] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payload"]["AppliedDegrees"][0]["Approved"], 1);
}

#[tokio::test]
async fn test_no_match_is_denied() {
    let app = test_router();

    let (status, body) = post_json(
        &app,
        "/invoke",
        json!({
            "function": "addAppliedDegree",
            "args": ["G1", "10", "MSc", "PhD", "99"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payload"]["Approved"], 0);
}

#[tokio::test]
async fn test_state_survives_engine_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = credence_node::config::NodeConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        store_path: Some(dir.path().join("credence.state")),
    };

    {
        let engine = Engine::open(&cfg).unwrap();
        let app = build_router(Arc::new(Mutex::new(engine)));
        let (status, _) = post_json(
            &app,
            "/invoke",
            json!({
                "function": "addToDegreesCompleted",
                "args": ["G1", "10", "500", "BSc", "2020", "75", "101", "A", "Regular"]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    // A fresh engine over the same state file sees the repository.
    let engine = Engine::open(&cfg).unwrap();
    let app = build_router(Arc::new(Mutex::new(engine)));
    let (status, body) = post_json(
        &app,
        "/query",
        json!({ "function": "read", "args": ["G1_1"] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payload"]["CompletedDegrees"][0]["DegreeName"], "BSc");
}

#[tokio::test]
async fn test_unknown_function_rejected() {
    let app = test_router();

    let (status, body) = post_json(
        &app,
        "/invoke",
        json!({ "function": "bogus", "args": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("bogus"));
}

#[tokio::test]
async fn test_arity_rejected() {
    let app = test_router();

    let (status, body) = post_json(
        &app,
        "/invoke",
        json!({
            "function": "addToDegreesCompleted",
            "args": ["G1", "10"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("incorrect number of arguments"));
}
