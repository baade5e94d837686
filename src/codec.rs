// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Serialization codec for ledger values.

use crate::error::{KernelError, KernelResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encode a value to its stored JSON representation.
pub fn encode<T: Serialize>(value: &T) -> KernelResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| KernelError::Encode(e.to_string()))
}

/// Decode stored bytes, treating absent, empty, or undecodable input as the
/// zero value. This is a deliberate recovery: a repository key with no prior
/// value must read as an empty repository, never as an error. The failure is
/// logged, not propagated.
pub fn decode_or_default<T: DeserializeOwned + Default>(raw: Option<&[u8]>) -> T {
    let Some(bytes) = raw else {
        return T::default();
    };
    if bytes.is_empty() {
        return T::default();
    }
    match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("undecodable state treated as empty: {}", e);
            T::default()
        }
    }
}
