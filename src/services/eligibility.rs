use std::fmt::Display;

use crate::models::{AcquiredSet, CertificationRecord, StudentProfile, Tier};

/// Why a record was kept out of the candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// Shares no field, major or department with the profile
    Irrelevant,
    AlreadyAcquired,
    /// The record's tier does not admit the student's grade
    GradeTier(Tier),
}

impl Display for Exclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Exclusion::Irrelevant => write!(f, "irrelevant"),
            Exclusion::AlreadyAcquired => write!(f, "already_acquired"),
            Exclusion::GradeTier(tier) => write!(f, "grade_tier:{}", tier),
        }
    }
}

/// Field, major or department overlap between record and profile
pub fn is_relevant(record: &CertificationRecord, profile: &StudentProfile) -> bool {
    record.related_fields.contains(&profile.field)
        || record.related_majors.contains(&profile.major)
        || record.related_departments.contains(&profile.department)
}

/// Runs every predicate, reporting the first one that fails
pub fn check(
    record: &CertificationRecord,
    profile: &StudentProfile,
    acquired: &AcquiredSet,
) -> Result<(), Exclusion> {
    if !is_relevant(record, profile) {
        return Err(Exclusion::Irrelevant);
    }
    if acquired.contains(&record.name) {
        return Err(Exclusion::AlreadyAcquired);
    }
    if !record.tier.admits_grade(profile.grade) {
        return Err(Exclusion::GradeTier(record.tier));
    }
    Ok(())
}

pub fn eligible(record: &CertificationRecord, profile: &StudentProfile, acquired: &AcquiredSet) -> bool {
    check(record, profile, acquired).is_ok()
}
