use crate::services::encoder::FeatureMatrix;

/// Cosine similarity; 0 when either vector has zero norm
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        tracing::warn!(
            a_len = a.len(),
            b_len = b.len(),
            "Feature dimension mismatch; returning zero similarity"
        );
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Scores the profile against every row of the matrix, in row order
pub fn score(profile_vector: &[f64], matrix: &FeatureMatrix) -> Vec<f64> {
    matrix
        .rows()
        .iter()
        .map(|row| cosine_similarity(profile_vector, row))
        .collect()
}
