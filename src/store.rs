// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! State store capability boundary.

use std::collections::HashMap;
use thiserror::Error;

/// A store-level failure. Distinct from a missing key, which `get` reports
/// as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct StoreError(pub String);

/// Key-value interface provided by the hosting ledger.
///
/// Keys are opaque UTF-8 strings, values opaque byte sequences. One statement
/// per call, no multi-key transactions. The platform serializes conflicting
/// transactions, so the kernel holds exclusive access to a key for the
/// duration of one operation.
pub trait StateStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}

/// In-memory store for tests and single-process hosts.
pub struct MemoryStore {
    data: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.data.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
