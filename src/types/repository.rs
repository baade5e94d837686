// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Per-person repositories: ordered, append-only record collections.

use super::degree::{AppliedDegree, CompletedDegree};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A repository is one serialized value per person, stored under
/// `<GovtID><KEY_SUFFIX>`. Insertion order is append order; entries are
/// never removed or mutated in place, and duplicates are permitted.
pub trait Repository: Default + Serialize + DeserializeOwned {
    type Record: Serialize;

    /// Suffix appended to the person identifier to derive the storage key.
    const KEY_SUFFIX: &'static str;

    fn push(&mut self, record: Self::Record);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedDegreeRepository {
    #[serde(rename = "CompletedDegrees", default)]
    pub completed_degrees: Vec<CompletedDegree>,
}

impl Repository for CompletedDegreeRepository {
    type Record = CompletedDegree;
    const KEY_SUFFIX: &'static str = "_1";

    fn push(&mut self, record: CompletedDegree) {
        self.completed_degrees.push(record);
    }

    fn len(&self) -> usize {
        self.completed_degrees.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedDegreeRepository {
    #[serde(rename = "AppliedDegrees", default)]
    pub applied_degrees: Vec<AppliedDegree>,
}

impl Repository for AppliedDegreeRepository {
    type Record = AppliedDegree;
    const KEY_SUFFIX: &'static str = "_2";

    fn push(&mut self, record: AppliedDegree) {
        self.applied_degrees.push(record);
    }

    fn len(&self) -> usize {
        self.applied_degrees.len()
    }
}
