// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

use crate::error::KernelError;
use crate::types::degree::{AppliedDegree, CompletedDegree};
use crate::types::repository::CompletedDegreeRepository;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn completed_args() -> Vec<String> {
    args(&[
        "G1", "10", "500", "BSc", "2020", "75", "101", "A", "Regular",
    ])
}

#[test]
fn test_completed_degree_from_args() {
    let degree = CompletedDegree::from_args(&completed_args()).unwrap();
    assert_eq!(degree.govt_id, "G1");
    assert_eq!(degree.institute_id, 10);
    assert_eq!(degree.degree_id, 500);
    assert_eq!(degree.degree_name, "BSc");
    assert_eq!(degree.passing_year, "2020");
    assert_eq!(degree.percentage, 75);
    assert_eq!(degree.roll_no, 101);
    assert_eq!(degree.grade, "A");
    assert_eq!(degree.degree_type, "Regular");
}

#[test]
fn test_completed_degree_arity() {
    let mut eight = completed_args();
    eight.pop();
    let err = CompletedDegree::from_args(&eight).unwrap_err();
    assert!(matches!(
        err,
        KernelError::ArgumentCount {
            expected: 9,
            got: 8
        }
    ));

    let mut ten = completed_args();
    ten.push("extra".to_string());
    let err = CompletedDegree::from_args(&ten).unwrap_err();
    assert!(matches!(
        err,
        KernelError::ArgumentCount {
            expected: 9,
            got: 10
        }
    ));
}

#[test]
fn test_completed_degree_numeric_fields() {
    let cases = [
        (1, "InstituteID"),
        (2, "DegreeID"),
        (5, "Percentage"),
        (6, "RollNo"),
    ];
    for (index, field) in cases {
        let mut bad = completed_args();
        bad[index] = "not-a-number".to_string();
        let err = CompletedDegree::from_args(&bad).unwrap_err();
        match err {
            KernelError::NumericParse { field: got } => assert_eq!(got, field),
            other => panic!("expected NumericParse for {}, got {:?}", field, other),
        }
    }
}

#[test]
fn test_applied_degree_from_args() {
    let degree = AppliedDegree::from_args(&args(&["G1", "10", "MSc", "BSc", "10"])).unwrap();
    assert_eq!(degree.govt_id, "G1");
    assert_eq!(degree.applied_institute_id, 10);
    assert_eq!(degree.degree_name, "MSc");
    assert_eq!(degree.pre_requisite_degree, "BSc");
    assert_eq!(degree.completed_institute_id, 10);
    // Approval is decided by the contract, not the builder.
    assert_eq!(degree.approved, 0);
}

#[test]
fn test_applied_degree_arity_and_numeric_fields() {
    let err = AppliedDegree::from_args(&args(&["G1", "10", "MSc", "BSc"])).unwrap_err();
    assert!(matches!(
        err,
        KernelError::ArgumentCount {
            expected: 5,
            got: 4
        }
    ));

    let err = AppliedDegree::from_args(&args(&["G1", "x", "MSc", "BSc", "10"])).unwrap_err();
    assert!(matches!(
        err,
        KernelError::NumericParse {
            field: "AppliedInstituteID"
        }
    ));

    let err = AppliedDegree::from_args(&args(&["G1", "10", "MSc", "BSc", "x"])).unwrap_err();
    assert!(matches!(
        err,
        KernelError::NumericParse {
            field: "CompletedInstituteID"
        }
    ));
}

#[test]
fn test_permissive_fields_accepted() {
    // Empty strings and non-positive numbers are deliberately not rejected.
    let degree =
        CompletedDegree::from_args(&args(&["", "-1", "0", "", "", "-100", "0", "", ""])).unwrap();
    assert_eq!(degree.govt_id, "");
    assert_eq!(degree.institute_id, -1);
    assert_eq!(degree.percentage, -100);
}

#[test]
fn test_stored_json_field_names() {
    let degree = CompletedDegree::from_args(&completed_args()).unwrap();
    let value = serde_json::to_value(&degree).unwrap();
    let object = value.as_object().unwrap();
    for key in [
        "GovtID",
        "InstituteID",
        "DegreeID",
        "DegreeName",
        "PassingYear",
        "Percentage",
        "RollNo",
        "Grade",
        "Type",
    ] {
        assert!(object.contains_key(key), "missing field {}", key);
    }
    assert_eq!(object.len(), 9);

    let mut repository = CompletedDegreeRepository::default();
    repository.completed_degrees.push(degree);
    let value = serde_json::to_value(&repository).unwrap();
    assert!(value.as_object().unwrap().contains_key("CompletedDegrees"));
}
