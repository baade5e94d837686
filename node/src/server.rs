// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::api::{
    payload_to_json, InitRequest, InvokeRequest, InvokeResponse, QueryRequest, QueryResponse,
};
use crate::engine::Engine;
use crate::errors::EngineError;

pub type SharedEngine = Arc<Mutex<Engine>>;

pub fn build_router(state: SharedEngine) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/init", post(init))
        .route("/invoke", post(invoke))
        .route("/query", post(query))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn init(
    State(state): State<SharedEngine>,
    Json(req): Json<InitRequest>,
) -> Result<Json<InvokeResponse>, EngineError> {
    let mut engine = state.lock().await;
    let payload = engine.init(&req.args)?;
    Ok(Json(InvokeResponse {
        payload: payload_to_json(&payload),
    }))
}

async fn invoke(
    State(state): State<SharedEngine>,
    Json(req): Json<InvokeRequest>,
) -> Result<Json<InvokeResponse>, EngineError> {
    let mut engine = state.lock().await;
    let payload = engine.invoke(&req.function, &req.args)?;
    Ok(Json(InvokeResponse {
        payload: payload_to_json(&payload),
    }))
}

async fn query(
    State(state): State<SharedEngine>,
    Json(req): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, EngineError> {
    let engine = state.lock().await;
    let payload = engine.query(&req.function, &req.args)?;
    Ok(Json(QueryResponse {
        payload: payload_to_json(&payload),
    }))
}
