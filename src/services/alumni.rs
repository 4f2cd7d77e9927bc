use crate::{error::AppResult, models::AlumniCount, services::data_source::DataSource};

/// Certificates most often held by students of the same department and major
///
/// Delegates to the configured `DataSource`, keeping the HTTP layer unaware
/// of where the aggregate comes from.
pub async fn alumni_stats(
    source: &dyn DataSource,
    department: &str,
    major: &str,
) -> AppResult<Vec<AlumniCount>> {
    let counts = source.alumni_counts(department, major).await?;

    tracing::info!(
        source = source.name(),
        %department,
        %major,
        entries = counts.len(),
        "Alumni statistics served"
    );

    Ok(counts)
}
