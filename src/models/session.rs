use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AcquiredSet;

/// Per-student state held by the API layer between requests
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentSession {
    pub id: Uuid,
    /// Acquired certificate names, in the order they were added
    pub acquired_certificates: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Default for StudentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            acquired_certificates: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a certificate; returns false if it was already listed
    pub fn add_acquired(&mut self, name: &str) -> bool {
        if self.acquired_certificates.iter().any(|c| c == name) {
            return false;
        }
        self.acquired_certificates.push(name.to_string());
        true
    }

    /// Removes a certificate; returns false if it was not listed
    pub fn remove_acquired(&mut self, name: &str) -> bool {
        let before = self.acquired_certificates.len();
        self.acquired_certificates.retain(|c| c != name);
        self.acquired_certificates.len() != before
    }

    /// Copy of the acquired set for a recommendation call
    pub fn snapshot(&self) -> AcquiredSet {
        self.acquired_certificates.iter().cloned().collect()
    }
}

/// A free-text comment left on a certificate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// General feedback about the recommendations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feedback {
    pub id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = StudentSession::new();
        assert!(session.acquired_certificates.is_empty());
        assert!(session.snapshot().is_empty());
    }

    #[test]
    fn test_add_acquired_ignores_duplicates() {
        let mut session = StudentSession::new();
        assert!(session.add_acquired("정보처리기사"));
        assert!(!session.add_acquired("정보처리기사"));
        assert_eq!(session.acquired_certificates, vec!["정보처리기사"]);
    }

    #[test]
    fn test_remove_acquired() {
        let mut session = StudentSession::new();
        session.add_acquired("CCNA");
        session.add_acquired("리눅스마스터");
        assert!(session.remove_acquired("CCNA"));
        assert!(!session.remove_acquired("CCNA"));
        assert_eq!(session.acquired_certificates, vec!["리눅스마스터"]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut session = StudentSession::new();
        session.add_acquired("CCNA");
        let snapshot = session.snapshot();
        session.remove_acquired("CCNA");
        assert!(snapshot.contains("CCNA"));
    }
}
