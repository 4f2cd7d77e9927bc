use crate::error::ConfigurationError;
use crate::models::{AcquiredSet, CertificationRecord, StudentProfile};
use crate::services::catalog::Catalog;
use crate::services::eligibility;
use crate::services::encoder::{self, FeatureMatrix, FeatureVocabulary};
use crate::services::similarity;

/// Number of recommendations returned when the caller does not ask otherwise
pub const DEFAULT_TOP_N: usize = 5;

/// A recommended record with its similarity score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCertification<'a> {
    pub record: &'a CertificationRecord,
    pub score: f64,
}

/// Eligible records ordered by descending similarity, at most `top_n`.
///
/// Equal scores keep catalog order.
pub fn rank<'a>(
    catalog: &'a Catalog,
    vocabulary: &FeatureVocabulary,
    matrix: &FeatureMatrix,
    profile: &StudentProfile,
    acquired: &AcquiredSet,
    top_n: usize,
) -> Result<Vec<ScoredCertification<'a>>, ConfigurationError> {
    if matrix.len() != catalog.len() || matrix.vocabulary_len() != vocabulary.len() {
        return Err(ConfigurationError::MatrixMismatch(format!(
            "matrix has {} rows over {} terms, catalog has {} records over {} terms",
            matrix.len(),
            matrix.vocabulary_len(),
            catalog.len(),
            vocabulary.len()
        )));
    }

    let profile_vector = encoder::encode_profile(profile, vocabulary)?;
    let scores = similarity::score(&profile_vector, matrix);

    let mut candidates: Vec<ScoredCertification<'a>> = catalog
        .records()
        .iter()
        .zip(scores)
        .filter(|(record, _)| match eligibility::check(record, profile, acquired) {
            Ok(()) => true,
            Err(reason) => {
                tracing::debug!(certificate = %record.name, %reason, "Certificate excluded");
                false
            }
        })
        .map(|(record, score)| ScoredCertification { record, score })
        .collect();

    let eligible_count = candidates.len();

    // sort_by is stable, so ties stay in catalog order
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(top_n);

    tracing::info!(
        grade = profile.grade,
        department = %profile.department,
        major = %profile.major,
        field = %profile.field,
        acquired = acquired.len(),
        eligible = eligible_count,
        returned = candidates.len(),
        "Recommendations ranked"
    );

    Ok(candidates)
}

/// Same as [`rank`], returning owned records without scores
pub fn recommend(
    catalog: &Catalog,
    vocabulary: &FeatureVocabulary,
    matrix: &FeatureMatrix,
    profile: &StudentProfile,
    acquired: &AcquiredSet,
    top_n: usize,
) -> Result<Vec<CertificationRecord>, ConfigurationError> {
    Ok(rank(catalog, vocabulary, matrix, profile, acquired, top_n)?
        .into_iter()
        .map(|scored| scored.record.clone())
        .collect())
}

/// Catalog, vocabulary and feature matrix built once and frozen together
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Catalog,
    vocabulary: FeatureVocabulary,
    matrix: FeatureMatrix,
}

impl RecommendationEngine {
    /// Builds the vocabulary and matrix for `catalog`
    pub fn build(catalog: Catalog) -> Self {
        let vocabulary = encoder::build_vocabulary(&catalog);
        let matrix = encoder::build_feature_matrix(&catalog, &vocabulary);

        tracing::info!(
            records = catalog.len(),
            vocabulary = vocabulary.len(),
            dimension = vocabulary.dimension(),
            "Recommendation engine built"
        );

        Self {
            catalog,
            vocabulary,
            matrix,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn vocabulary(&self) -> &FeatureVocabulary {
        &self.vocabulary
    }

    pub fn matrix(&self) -> &FeatureMatrix {
        &self.matrix
    }

    pub fn rank(
        &self,
        profile: &StudentProfile,
        acquired: &AcquiredSet,
        top_n: usize,
    ) -> Result<Vec<ScoredCertification<'_>>, ConfigurationError> {
        rank(
            &self.catalog,
            &self.vocabulary,
            &self.matrix,
            profile,
            acquired,
            top_n,
        )
    }

    pub fn recommend(
        &self,
        profile: &StudentProfile,
        acquired: &AcquiredSet,
        top_n: usize,
    ) -> Result<Vec<CertificationRecord>, ConfigurationError> {
        recommend(
            &self.catalog,
            &self.vocabulary,
            &self.matrix,
            profile,
            acquired,
            top_n,
        )
    }
}
