// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Command enum definitions.
//!
//! The dispatch layer hands the contract an operation name and an ordered
//! argument list. Both are resolved here exactly once into a typed command;
//! everything past this boundary routes through an exhaustive match.

use crate::error::{KernelError, KernelResult};
use crate::types::degree::{expect_arity, AppliedDegree, CompletedDegree};

/// Mutating operations.
#[derive(Clone, Debug, PartialEq)]
pub enum InvokeCommand {
    /// Store the bootstrap marker.
    Init { marker: String },
    /// Opaque key/value escape hatch, bypassing the typed model.
    Write { key: String, value: String },
    /// `addToDegreesCompleted`: 9 positional fields.
    AddCompletedDegree(CompletedDegree),
    /// `addAppliedDegree`: 5 positional fields; approval is decided later.
    AddAppliedDegree(AppliedDegree),
}

impl InvokeCommand {
    pub fn resolve(function: &str, args: &[String]) -> KernelResult<Self> {
        match function {
            "init" => {
                expect_arity(args, 1)?;
                Ok(Self::Init {
                    marker: args[0].clone(),
                })
            }
            "write" => {
                expect_arity(args, 2)?;
                Ok(Self::Write {
                    key: args[0].clone(),
                    value: args[1].clone(),
                })
            }
            "addToDegreesCompleted" => Ok(Self::AddCompletedDegree(CompletedDegree::from_args(
                args,
            )?)),
            "addAppliedDegree" => Ok(Self::AddAppliedDegree(AppliedDegree::from_args(args)?)),
            _ => Err(KernelError::UnknownOperation {
                name: function.to_string(),
            }),
        }
    }
}

/// Read-only operations.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryCommand {
    Read { key: String },
}

impl QueryCommand {
    pub fn resolve(function: &str, args: &[String]) -> KernelResult<Self> {
        match function {
            "read" => {
                expect_arity(args, 1)?;
                Ok(Self::Read {
                    key: args[0].clone(),
                })
            }
            _ => Err(KernelError::UnknownOperation {
                name: function.to_string(),
            }),
        }
    }
}
