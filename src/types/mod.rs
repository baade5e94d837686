// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Domain record and repository definitions.

pub mod degree;
pub mod repository;

pub use degree::{AppliedDegree, CompletedDegree};
pub use repository::{AppliedDegreeRepository, CompletedDegreeRepository, Repository};
