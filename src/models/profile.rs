use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Snapshot of the certificates a student already holds
pub type AcquiredSet = BTreeSet<String>;

/// Academic attributes a recommendation request is made for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentProfile {
    /// School year, 1 through 4
    pub grade: u8,
    pub department: String,
    pub major: String,
    /// Desired field of work, a child of `major`
    pub field: String,
}

impl StudentProfile {
    pub fn new(
        grade: u8,
        department: impl Into<String>,
        major: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            grade,
            department: department.into(),
            major: major.into(),
            field: field.into(),
        }
    }

    /// Whether `tag` names this profile's field, department or major
    pub fn matches_tag(&self, tag: &str) -> bool {
        tag == self.field || tag == self.department || tag == self.major
    }
}
