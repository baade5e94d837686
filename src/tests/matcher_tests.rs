// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

use crate::matcher::decide_approval;
use crate::types::degree::{AppliedDegree, CompletedDegree};
use crate::types::repository::CompletedDegreeRepository;

fn completed(name: &str, institute_id: i64) -> CompletedDegree {
    CompletedDegree {
        govt_id: "G1".to_string(),
        institute_id,
        degree_id: 500,
        degree_name: name.to_string(),
        passing_year: "2020".to_string(),
        percentage: 75,
        roll_no: 101,
        grade: "A".to_string(),
        degree_type: "Regular".to_string(),
    }
}

fn applied(prerequisite: &str, completed_institute_id: i64) -> AppliedDegree {
    AppliedDegree {
        govt_id: "G1".to_string(),
        applied_institute_id: 20,
        degree_name: "MSc".to_string(),
        pre_requisite_degree: prerequisite.to_string(),
        completed_institute_id,
        approved: 0,
    }
}

#[test]
fn test_empty_repository_denies() {
    let repository = CompletedDegreeRepository::default();
    assert_eq!(decide_approval(&applied("BSc", 10), &repository), 0);
}

#[test]
fn test_match_on_name_and_institute() {
    let repository = CompletedDegreeRepository {
        completed_degrees: vec![completed("BA", 10), completed("BSc", 10)],
    };
    assert_eq!(decide_approval(&applied("BSc", 10), &repository), 1);
}

#[test]
fn test_both_fields_must_match() {
    let repository = CompletedDegreeRepository {
        completed_degrees: vec![completed("BSc", 10)],
    };
    // Name matches, institute differs.
    assert_eq!(decide_approval(&applied("BSc", 99), &repository), 0);
    // Institute matches, name differs.
    assert_eq!(decide_approval(&applied("PhD", 10), &repository), 0);
}

#[test]
fn test_multiple_matches_still_approve() {
    // Only existence matters; duplicates are permitted in the repository.
    let repository = CompletedDegreeRepository {
        completed_degrees: vec![completed("BSc", 10), completed("BSc", 10)],
    };
    assert_eq!(decide_approval(&applied("BSc", 10), &repository), 1);
}

#[test]
fn test_deterministic() {
    let repository = CompletedDegreeRepository {
        completed_degrees: vec![completed("BSc", 10)],
    };
    let application = applied("BSc", 10);
    let first = decide_approval(&application, &repository);
    for _ in 0..10 {
        assert_eq!(decide_approval(&application, &repository), first);
    }
}
