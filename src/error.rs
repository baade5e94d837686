// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use crate::store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KernelError {
    /// Wrong number of positional arguments for an operation.
    #[error("incorrect number of arguments: expected {expected}, got {got}")]
    ArgumentCount { expected: usize, got: usize },
    /// A field that must hold an integer could not be parsed as one.
    #[error("{field} must be a numeric string")]
    NumericParse { field: &'static str },
    /// The state store failed while reading a key. A missing key is not an error.
    #[error("failed to get state for {key}: {source}")]
    StoreRead { key: String, source: StoreError },
    /// The state store failed while writing a key.
    #[error("failed to put state for {key}: {source}")]
    StoreWrite { key: String, source: StoreError },
    /// Dispatch miss: the operation name is not part of the contract.
    #[error("received unknown function invocation: {name}")]
    UnknownOperation { name: String },
    /// A value failed to encode.
    #[error("failed to encode value: {0}")]
    Encode(String),
}

pub type KernelResult<T> = core::result::Result<T, KernelError>;
