// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::NodeConfig;
use crate::errors::EngineError;
use credence_kernel::contract;
use credence_kernel::store::{MemoryStore, StateStore};
use credence_persistence::FileStore;

/// Host wrapper around the kernel contract: owns the state store and hands it
/// to each operation. One operation runs at a time (the server keeps the
/// engine behind a mutex), which gives the kernel the exclusive key access it
/// assumes.
pub struct Engine {
    store: Box<dyn StateStore + Send>,
}

impl Engine {
    pub fn open(cfg: &NodeConfig) -> Result<Self, EngineError> {
        let store: Box<dyn StateStore + Send> = match &cfg.store_path {
            Some(path) => {
                tracing::info!("Opening ledger state at {:?}", path);
                let store =
                    FileStore::open(path).map_err(|e| EngineError::Persistence(e.to_string()))?;
                Box::new(store)
            }
            None => {
                tracing::warn!("No store path configured; ledger state is in-memory only");
                Box::new(MemoryStore::new())
            }
        };
        Ok(Self { store })
    }

    pub fn with_store(store: Box<dyn StateStore + Send>) -> Self {
        Self { store }
    }

    pub fn init(&mut self, args: &[String]) -> Result<Vec<u8>, EngineError> {
        Ok(contract::init(self.store.as_mut(), args)?)
    }

    pub fn invoke(&mut self, function: &str, args: &[String]) -> Result<Vec<u8>, EngineError> {
        Ok(contract::invoke(self.store.as_mut(), function, args)?)
    }

    pub fn query(&self, function: &str, args: &[String]) -> Result<Vec<u8>, EngineError> {
        Ok(contract::query(self.store.as_ref(), function, args)?)
    }
}
