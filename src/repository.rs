// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Repository Manager: read-modify-write append semantics for the per-person
//! degree repositories.

use crate::codec;
use crate::error::{KernelError, KernelResult};
use crate::store::StateStore;
use crate::types::repository::Repository;

/// Storage key for a person's repository of kind `R`.
pub fn storage_key<R: Repository>(govt_id: &str) -> String {
    format!("{}{}", govt_id, R::KEY_SUFFIX)
}

/// Read a person's repository. Absent or undecodable bytes yield the empty
/// repository; only a store-level read failure is an error.
pub fn load<R: Repository>(store: &dyn StateStore, govt_id: &str) -> KernelResult<R> {
    let key = storage_key::<R>(govt_id);
    let raw = store
        .get(&key)
        .map_err(|source| KernelError::StoreRead { key, source })?;
    Ok(codec::decode_or_default(raw.as_deref()))
}

/// Append one record to a person's repository.
///
/// Read, decode-or-default, push, encode, write back: exactly one store write
/// per call. A store-level read failure aborts before any write. No
/// uniqueness check is made across records.
pub fn append<R: Repository>(
    store: &mut dyn StateStore,
    govt_id: &str,
    record: R::Record,
) -> KernelResult<()> {
    let key = storage_key::<R>(govt_id);
    let raw = store.get(&key).map_err(|source| KernelError::StoreRead {
        key: key.clone(),
        source,
    })?;

    let mut repository: R = codec::decode_or_default(raw.as_deref());
    repository.push(record);

    let encoded = codec::encode(&repository)?;
    store
        .put(&key, &encoded)
        .map_err(|source| KernelError::StoreWrite { key, source })?;
    Ok(())
}
