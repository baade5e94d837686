// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Top-level operation handlers.
//!
//! Each entry point runs to completion as one unit of work against the
//! injected state store. Failures surface synchronously; the hosting ledger
//! treats a returned error as an aborted transaction.

use crate::codec;
use crate::command::{InvokeCommand, QueryCommand};
use crate::error::{KernelError, KernelResult};
use crate::matcher;
use crate::repository;
use crate::store::StateStore;
use crate::types::degree::{expect_arity, AppliedDegree, CompletedDegree};
use crate::types::repository::{AppliedDegreeRepository, CompletedDegreeRepository};

/// Fixed key holding the bootstrap marker written at initialization.
pub const BOOTSTRAP_KEY: &str = "hello_Block";

/// Initialization entry: exactly one argument, stored under [`BOOTSTRAP_KEY`].
pub fn init(store: &mut dyn StateStore, args: &[String]) -> KernelResult<Vec<u8>> {
    expect_arity(args, 1)?;
    store
        .put(BOOTSTRAP_KEY, args[0].as_bytes())
        .map_err(|source| KernelError::StoreWrite {
            key: BOOTSTRAP_KEY.to_string(),
            source,
        })?;
    Ok(Vec::new())
}

/// Mutating entry point, dispatched by operation name.
pub fn invoke(store: &mut dyn StateStore, function: &str, args: &[String]) -> KernelResult<Vec<u8>> {
    tracing::info!("invoke is running {}", function);
    match InvokeCommand::resolve(function, args)? {
        InvokeCommand::Init { .. } => init(store, args),
        InvokeCommand::Write { key, value } => write(store, &key, value.as_bytes()),
        InvokeCommand::AddCompletedDegree(degree) => add_completed_degree(store, degree),
        InvokeCommand::AddAppliedDegree(degree) => add_applied_degree(store, degree),
    }
}

/// Read-only entry point, dispatched by operation name.
pub fn query(store: &dyn StateStore, function: &str, args: &[String]) -> KernelResult<Vec<u8>> {
    tracing::info!("query is running {}", function);
    match QueryCommand::resolve(function, args)? {
        QueryCommand::Read { key } => read(store, &key),
    }
}

fn write(store: &mut dyn StateStore, key: &str, value: &[u8]) -> KernelResult<Vec<u8>> {
    store
        .put(key, value)
        .map_err(|source| KernelError::StoreWrite {
            key: key.to_string(),
            source,
        })?;
    Ok(Vec::new())
}

fn read(store: &dyn StateStore, key: &str) -> KernelResult<Vec<u8>> {
    let value = store.get(key).map_err(|source| KernelError::StoreRead {
        key: key.to_string(),
        source,
    })?;
    // A missing key reads as an empty payload, matching stored-data consumers.
    Ok(value.unwrap_or_default())
}

/// `addToDegreesCompleted`: store the raw record snapshot under the bare
/// GovtID, then append to the person's completed-degree repository.
///
/// The two writes are not transactionally linked: if the repository append
/// fails, the snapshot write stands. The repository under `<GovtID>_1` is the
/// source of truth; the snapshot is a latest-record convenience value and is
/// never reconciled afterwards.
fn add_completed_degree(
    store: &mut dyn StateStore,
    degree: CompletedDegree,
) -> KernelResult<Vec<u8>> {
    tracing::info!("adding new degree for {}", degree.govt_id);

    let govt_id = degree.govt_id.clone();
    let encoded = codec::encode(&degree)?;
    store
        .put(&govt_id, &encoded)
        .map_err(|source| KernelError::StoreWrite {
            key: govt_id.clone(),
            source,
        })?;

    repository::append::<CompletedDegreeRepository>(store, &govt_id, degree)?;
    Ok(encoded)
}

/// `addAppliedDegree`: decide approval against the completed-degree
/// repository as it stands right now, then append the finished record.
/// Approval is fixed at creation time and never re-derived.
fn add_applied_degree(
    store: &mut dyn StateStore,
    mut degree: AppliedDegree,
) -> KernelResult<Vec<u8>> {
    tracing::info!("adding new applied degree for {}", degree.govt_id);

    let completed: CompletedDegreeRepository = repository::load(store, &degree.govt_id)?;
    degree.approved = matcher::decide_approval(&degree, &completed);

    let govt_id = degree.govt_id.clone();
    let encoded = codec::encode(&degree)?;
    repository::append::<AppliedDegreeRepository>(store, &govt_id, degree)?;
    Ok(encoded)
}
