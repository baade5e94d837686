// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Degree records and their positional-argument builders.

use crate::error::{KernelError, KernelResult};
use serde::{Deserialize, Serialize};

/// A degree a person has finished. Immutable once appended to a repository.
///
/// JSON field names are pinned for interoperability with previously stored
/// ledger data; do not rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedDegree {
    #[serde(rename = "GovtID")]
    pub govt_id: String,
    #[serde(rename = "InstituteID")]
    pub institute_id: i64,
    #[serde(rename = "DegreeID")]
    pub degree_id: i64,
    #[serde(rename = "DegreeName")]
    pub degree_name: String,
    #[serde(rename = "PassingYear")]
    pub passing_year: String,
    #[serde(rename = "Percentage")]
    pub percentage: i64,
    #[serde(rename = "RollNo")]
    pub roll_no: i64,
    #[serde(rename = "Grade")]
    pub grade: String,
    #[serde(rename = "Type")]
    pub degree_type: String,
}

/// An application for a degree. `Approved` is computed against the person's
/// completed-degree repository when the record is built and never re-derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedDegree {
    #[serde(rename = "GovtID")]
    pub govt_id: String,
    #[serde(rename = "AppliedInstituteID")]
    pub applied_institute_id: i64,
    #[serde(rename = "DegreeName")]
    pub degree_name: String,
    #[serde(rename = "PreRequisiteDegree")]
    pub pre_requisite_degree: String,
    #[serde(rename = "CompletedInstituteID")]
    pub completed_institute_id: i64,
    #[serde(rename = "Approved")]
    pub approved: i64,
}

impl CompletedDegree {
    pub const ARITY: usize = 9;

    /// Build from the ordered argument list
    /// `GovtID, InstituteID, DegreeID, DegreeName, PassingYear, Percentage, RollNo, Grade, Type`.
    ///
    /// Only arity and the numeric fields are validated; empty strings and
    /// non-positive numbers are accepted.
    pub fn from_args(args: &[String]) -> KernelResult<Self> {
        expect_arity(args, Self::ARITY)?;
        Ok(Self {
            govt_id: args[0].clone(),
            institute_id: parse_numeric(&args[1], "InstituteID")?,
            degree_id: parse_numeric(&args[2], "DegreeID")?,
            degree_name: args[3].clone(),
            passing_year: args[4].clone(),
            percentage: parse_numeric(&args[5], "Percentage")?,
            roll_no: parse_numeric(&args[6], "RollNo")?,
            grade: args[7].clone(),
            degree_type: args[8].clone(),
        })
    }
}

impl AppliedDegree {
    pub const ARITY: usize = 5;

    /// Build from the ordered argument list
    /// `GovtID, AppliedInstituteID, DegreeName, PreRequisiteDegree, CompletedInstituteID`.
    ///
    /// `Approved` starts at 0; the contract fixes it before the record is stored.
    pub fn from_args(args: &[String]) -> KernelResult<Self> {
        expect_arity(args, Self::ARITY)?;
        Ok(Self {
            govt_id: args[0].clone(),
            applied_institute_id: parse_numeric(&args[1], "AppliedInstituteID")?,
            degree_name: args[2].clone(),
            pre_requisite_degree: args[3].clone(),
            completed_institute_id: parse_numeric(&args[4], "CompletedInstituteID")?,
            approved: 0,
        })
    }
}

pub(crate) fn expect_arity(args: &[String], expected: usize) -> KernelResult<()> {
    if args.len() != expected {
        return Err(KernelError::ArgumentCount {
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

fn parse_numeric(value: &str, field: &'static str) -> KernelResult<i64> {
    value
        .parse::<i64>()
        .map_err(|_| KernelError::NumericParse { field })
}
