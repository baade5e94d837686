// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Approval Matcher.

use crate::types::degree::AppliedDegree;
use crate::types::repository::CompletedDegreeRepository;

/// Decide approval for an applied degree against a person's completed-degree
/// repository.
///
/// Linear scan in stored order; `1` iff some completed entry matches the
/// application on `(DegreeName, InstituteID)` against
/// `(PreRequisiteDegree, CompletedInstituteID)`, else `0`. The first match
/// short-circuits. Pure function of its inputs: ledger execution must be
/// replay-deterministic across replicas.
pub fn decide_approval(applied: &AppliedDegree, completed: &CompletedDegreeRepository) -> i64 {
    for degree in &completed.completed_degrees {
        if degree.degree_name == applied.pre_requisite_degree
            && degree.institute_id == applied.completed_institute_id
        {
            return 1;
        }
    }
    0
}
