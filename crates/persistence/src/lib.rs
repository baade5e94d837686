//! Host-side persistence for the credence ledger state: a checksummed,
//! atomically rewritten key-value snapshot file.

pub mod error;
pub mod file_store;

pub use error::{PersistenceError, Result};
pub use file_store::FileStore;
