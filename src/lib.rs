// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! credence-kernel: a deterministic credential repository + approval matching engine
//! embedded in a ledger execution environment.

pub mod error;
pub mod types;
pub mod codec;
pub mod store;
pub mod repository;
pub mod matcher;
pub mod command;
pub mod contract;
pub mod verify;

#[cfg(test)]
pub mod tests;
