// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use credence_kernel::error::KernelError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Kernel error: {0}")]
    Kernel(#[from] KernelError),
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            EngineError::Kernel(k_err) => match k_err {
                KernelError::ArgumentCount { .. }
                | KernelError::NumericParse { .. }
                | KernelError::UnknownOperation { .. } => {
                    (StatusCode::BAD_REQUEST, k_err.to_string())
                }
                KernelError::StoreRead { .. }
                | KernelError::StoreWrite { .. }
                | KernelError::Encode(_) => (StatusCode::INTERNAL_SERVER_ERROR, k_err.to_string()),
            },
            EngineError::Persistence(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
