// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct InitRequest {
    pub args: Vec<String>,
}

#[derive(Deserialize)]
pub struct InvokeRequest {
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Serialize)]
pub struct InvokeResponse {
    pub payload: serde_json::Value,
}

#[derive(Deserialize)]
pub struct QueryRequest {
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Serialize)]
pub struct QueryResponse {
    pub payload: serde_json::Value,
}

/// Operation payloads are raw bytes from the contract. Stored values are
/// JSON text, so decode when possible and fall back to a plain string.
pub fn payload_to_json(bytes: &[u8]) -> serde_json::Value {
    if bytes.is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
