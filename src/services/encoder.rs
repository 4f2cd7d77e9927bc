//! Multi-label feature encoding of catalog records and student profiles.
//!
//! Every row is a one-hot indicator over the catalog's tag vocabulary
//! followed by three numeric columns: difficulty, highest career level and
//! popularity. Profiles are encoded into the same space with proxy values
//! for the numeric columns.

use std::collections::BTreeSet;

use crate::error::ConfigurationError;
use crate::models::{CertificationRecord, StudentProfile};
use crate::services::catalog::Catalog;

/// Number of numeric columns appended after the one-hot block
pub const NUMERIC_COLUMNS: usize = 3;

/// Popularity proxy for profiles: every certificate counts as maximally popular
const PROFILE_POPULARITY: f64 = 5.0;

/// Sorted set of distinct tags across the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureVocabulary {
    terms: Vec<String>,
}

impl FeatureVocabulary {
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms
            .binary_search_by(|t| t.as_str().cmp(term))
            .is_ok()
    }

    /// Length of a full feature row over this vocabulary
    pub fn dimension(&self) -> usize {
        self.terms.len() + NUMERIC_COLUMNS
    }
}

/// One feature row per catalog record, in catalog order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureMatrix {
    rows: Vec<Vec<f64>>,
    vocabulary_len: usize,
}

impl FeatureMatrix {
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Vocabulary size the matrix was encoded against
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary_len
    }
}

/// Collects every tag from fields, departments and majors
pub fn build_vocabulary(catalog: &Catalog) -> FeatureVocabulary {
    let terms: BTreeSet<&str> = catalog.records().iter().flat_map(|r| r.tags()).collect();

    let vocabulary = FeatureVocabulary {
        terms: terms.into_iter().map(str::to_string).collect(),
    };

    tracing::debug!(terms = vocabulary.len(), "Feature vocabulary built");

    vocabulary
}

fn encode_record(record: &CertificationRecord, vocabulary: &FeatureVocabulary) -> Vec<f64> {
    let tags: BTreeSet<&str> = record.tags().collect();

    let mut row: Vec<f64> = vocabulary
        .terms
        .iter()
        .map(|term| if tags.contains(term.as_str()) { 1.0 } else { 0.0 })
        .collect();

    row.extend([
        f64::from(record.difficulty),
        f64::from(record.max_career_level()),
        f64::from(record.popularity),
    ]);
    row
}

/// Encodes every catalog record against `vocabulary`
pub fn encode_catalog(catalog: &Catalog, vocabulary: &FeatureVocabulary) -> FeatureMatrix {
    let rows = catalog
        .records()
        .iter()
        .map(|record| encode_record(record, vocabulary))
        .collect();

    FeatureMatrix {
        rows,
        vocabulary_len: vocabulary.len(),
    }
}

/// Same as [`encode_catalog`]
pub fn build_feature_matrix(catalog: &Catalog, vocabulary: &FeatureVocabulary) -> FeatureMatrix {
    encode_catalog(catalog, vocabulary)
}

/// Encodes a profile into the catalog's feature space
pub fn encode_profile(
    profile: &StudentProfile,
    vocabulary: &FeatureVocabulary,
) -> Result<Vec<f64>, ConfigurationError> {
    if vocabulary.is_empty() {
        return Err(ConfigurationError::EmptyVocabulary);
    }

    let grade = f64::from(profile.grade);

    let mut vector: Vec<f64> = vocabulary
        .terms
        .iter()
        .map(|term| if profile.matches_tag(term) { 1.0 } else { 0.0 })
        .collect();

    vector.extend([grade.min(5.0) / 5.0, grade, PROFILE_POPULARITY]);
    Ok(vector)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, fields: &[&str], departments: &[&str], majors: &[&str]) -> CertificationRecord {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "related_fields": fields,
            "related_departments": departments,
            "related_majors": majors,
            "difficulty": 3,
            "career_level": [1, 3, 2],
            "popularity": 4,
        }))
        .unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            record("정보처리기사", &["소프트웨어개발", "빅데이터"], &["컴퓨터공학부"], &["컴퓨터공학"]),
            record("네트워크관리사", &["네트워크"], &["전기전자통신공학부"], &["정보통신공학전공"]),
            record("빈자격증", &[], &[], &[]),
        ])
        .unwrap()
    }

    #[test]
    fn test_vocabulary_has_every_tag_once() {
        let vocabulary = build_vocabulary(&catalog());
        let expected: BTreeSet<&str> = [
            "소프트웨어개발",
            "빅데이터",
            "컴퓨터공학부",
            "컴퓨터공학",
            "네트워크",
            "전기전자통신공학부",
            "정보통신공학전공",
        ]
        .into_iter()
        .collect();

        assert_eq!(vocabulary.len(), expected.len());
        for term in vocabulary.terms() {
            assert!(expected.contains(term.as_str()));
        }
        assert!(vocabulary.terms().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_catalog_rows_have_numeric_tail() {
        let catalog = catalog();
        let vocabulary = build_vocabulary(&catalog);
        let matrix = encode_catalog(&catalog, &vocabulary);

        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix.vocabulary_len(), vocabulary.len());
        for row in matrix.rows() {
            assert_eq!(row.len(), vocabulary.dimension());
            assert_eq!(&row[vocabulary.len()..], &[3.0, 3.0, 4.0]);
        }

        let tagged: f64 = matrix.rows()[0][..vocabulary.len()].iter().sum();
        assert_eq!(tagged, 4.0);
        let untagged: f64 = matrix.rows()[2][..vocabulary.len()].iter().sum();
        assert_eq!(untagged, 0.0);
    }

    #[test]
    fn test_encode_profile() {
        let vocabulary = build_vocabulary(&catalog());
        let profile = StudentProfile::new(2, "컴퓨터공학부", "컴퓨터공학", "빅데이터");
        let vector = encode_profile(&profile, &vocabulary).unwrap();

        assert_eq!(vector.len(), vocabulary.dimension());
        let ones: f64 = vector[..vocabulary.len()].iter().sum();
        assert_eq!(ones, 3.0);
        assert_eq!(&vector[vocabulary.len()..], &[0.4, 2.0, 5.0]);
    }

    #[test]
    fn test_encode_profile_rejects_empty_vocabulary() {
        let profile = StudentProfile::new(2, "컴퓨터공학부", "컴퓨터공학", "빅데이터");
        assert_eq!(
            encode_profile(&profile, &FeatureVocabulary::default()),
            Err(ConfigurationError::EmptyVocabulary)
        );
    }

    #[test]
    fn test_vocabulary_contains() {
        let vocabulary = build_vocabulary(&catalog());
        assert!(vocabulary.contains("네트워크"));
        assert!(!vocabulary.contains("로봇"));
    }
}
