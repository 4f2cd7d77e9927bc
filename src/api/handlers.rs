use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::models::{
    AcquiredSet, AlumniCount, CertificationRecord, Comment, Feedback, StudentProfile,
    StudentSession, Tier,
};
use crate::services::{alumni, internships, ScoredCertification};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub grade: u8,
    pub department: String,
    pub major: String,
    pub field: String,
    /// Session whose acquired list is excluded from the results
    #[serde(default)]
    pub session_id: Option<Uuid>,
    /// Extra acquired certificates, merged with the session's
    #[serde(default)]
    pub acquired: Vec<String>,
    #[serde(default)]
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationItem {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub related_fields: Vec<String>,
    pub difficulty: u8,
    pub popularity: u8,
    pub schedule: String,
    pub fee: String,
    pub description: String,
    /// "O" or "X"
    pub graduation_requirement: &'static str,
    pub tier: Tier,
    pub score: f64,
}

impl From<&ScoredCertification<'_>> for RecommendationItem {
    fn from(scored: &ScoredCertification<'_>) -> Self {
        let record = scored.record;
        Self {
            name: record.name.clone(),
            kind: record.kind.clone(),
            related_fields: record.related_fields.clone(),
            difficulty: record.difficulty,
            popularity: record.popularity,
            schedule: record.schedule.clone(),
            fee: record.fee.clone(),
            description: record.description.clone(),
            graduation_requirement: record.graduation_mark(),
            tier: record.tier,
            score: scored.score,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub profile: StudentProfile,
    pub recommendations: Vec<RecommendationItem>,
    /// Set when nothing matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MajorResponse {
    pub name: String,
    pub fields: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DepartmentResponse {
    pub name: String,
    pub majors: Vec<MajorResponse>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub acquired_certificates: Vec<String>,
}

impl From<&StudentSession> for SessionResponse {
    fn from(session: &StudentSession) -> Self {
        Self {
            id: session.id,
            acquired_certificates: session.acquired_certificates.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddAcquiredRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AlumniQuery {
    pub department: String,
    pub major: String,
}

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

const NO_RECOMMENDATIONS: &str = "선택한 조건에 맞는 추천 자격증이 없습니다.";

fn non_empty_text(text: String) -> AppResult<String> {
    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::InvalidInput("text must not be empty".to_string()));
    }
    Ok(text)
}

fn ensure_certificate(state: &AppState, name: &str) -> AppResult<()> {
    if state.engine.catalog().contains(name) {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("certificate '{}'", name)))
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Departments with their majors and fields
pub async fn get_taxonomy(State(state): State<AppState>) -> Json<Vec<DepartmentResponse>> {
    let departments = state
        .taxonomy
        .departments()
        .iter()
        .map(|department| DepartmentResponse {
            name: department.name.clone(),
            majors: department
                .majors
                .iter()
                .map(|major| MajorResponse {
                    name: major.clone(),
                    fields: state
                        .taxonomy
                        .fields_of(major)
                        .map(<[String]>::to_vec)
                        .unwrap_or_default(),
                })
                .collect(),
        })
        .collect();
    Json(departments)
}

/// Certificate names, alphabetically
pub async fn get_certificates(State(state): State<AppState>) -> Json<Vec<String>> {
    let names = state
        .engine
        .catalog()
        .sorted_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(names)
}

/// A single catalog record
pub async fn get_certificate(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<CertificationRecord>> {
    state
        .engine
        .catalog()
        .get(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("certificate '{}'", name)))
}

/// Ranked certificate recommendations for a profile
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    let top_n = request.top_n.unwrap_or(state.settings.default_top_n);
    if top_n > state.settings.max_top_n {
        return Err(AppError::InvalidInput(format!(
            "top_n {} exceeds the maximum of {}",
            top_n, state.settings.max_top_n
        )));
    }

    let profile = StudentProfile::new(
        request.grade,
        request.department,
        request.major,
        request.field,
    );
    state.taxonomy.validate_profile(&profile)?;

    let mut acquired: AcquiredSet = request.acquired.into_iter().collect();
    if let Some(session_id) = request.session_id {
        let inner = state.inner.read().await;
        let session = inner
            .sessions
            .get(&session_id)
            .ok_or_else(|| AppError::NotFound(format!("session {}", session_id)))?;
        acquired.extend(session.snapshot());
    }

    tracing::info!(
        request_id = %request_id,
        grade = profile.grade,
        acquired = acquired.len(),
        top_n,
        "Processing recommendation request"
    );

    let ranked = state.engine.rank(&profile, &acquired, top_n)?;
    let recommendations: Vec<RecommendationItem> =
        ranked.iter().map(RecommendationItem::from).collect();

    let message = recommendations
        .is_empty()
        .then(|| NO_RECOMMENDATIONS.to_string());

    Ok(Json(RecommendationResponse {
        profile,
        recommendations,
        message,
    }))
}

/// Start a session with an empty acquired list
pub async fn create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let session = StudentSession::new();
    let response = SessionResponse::from(&session);

    let mut inner = state.inner.write().await;
    inner.sessions.insert(session.id, session);

    tracing::info!(session_id = %response.id, "Session created");

    (StatusCode::CREATED, Json(response))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<SessionResponse>> {
    let inner = state.inner.read().await;
    inner
        .sessions
        .get(&session_id)
        .map(|session| Json(SessionResponse::from(session)))
        .ok_or_else(|| AppError::NotFound(format!("session {}", session_id)))
}

/// Record a certificate as acquired
pub async fn add_acquired(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AddAcquiredRequest>,
) -> AppResult<Json<SessionResponse>> {
    ensure_certificate(&state, &request.name)?;

    let mut inner = state.inner.write().await;
    let session = inner
        .sessions
        .get_mut(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("session {}", session_id)))?;

    if session.add_acquired(&request.name) {
        tracing::info!(%session_id, certificate = %request.name, "Acquired certificate added");
    }

    Ok(Json(SessionResponse::from(&*session)))
}

/// Drop a certificate from the acquired list
pub async fn remove_acquired(
    State(state): State<AppState>,
    Path((session_id, name)): Path<(Uuid, String)>,
) -> AppResult<Json<SessionResponse>> {
    let mut inner = state.inner.write().await;
    let session = inner
        .sessions
        .get_mut(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("session {}", session_id)))?;

    if session.remove_acquired(&name) {
        tracing::info!(%session_id, certificate = %name, "Acquired certificate removed");
    }

    Ok(Json(SessionResponse::from(&*session)))
}

/// Certificates held by students of the same department and major
pub async fn get_alumni_stats(
    State(state): State<AppState>,
    Query(query): Query<AlumniQuery>,
) -> AppResult<Json<Vec<AlumniCount>>> {
    let stats =
        alumni::alumni_stats(state.data_source.as_ref(), &query.department, &query.major).await?;
    Ok(Json(stats))
}

/// Internship postings matching the query, grouped by duration
pub async fn search_internships(
    State(state): State<AppState>,
    Json(query): Json<internships::InternshipQuery>,
) -> AppResult<Json<internships::InternshipSearchResult>> {
    if let Some(grade) = query.grade {
        if !(1..=4).contains(&grade) {
            return Err(AppError::InvalidInput(format!(
                "grade {} is outside 1..=4",
                grade
            )));
        }
    }

    let result = internships::search_internships(
        state.data_source.as_ref(),
        &query,
        state.settings.long_term_min_months,
    )
    .await?;
    Ok(Json(result))
}

pub async fn get_comments(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<Comment>>> {
    ensure_certificate(&state, &name)?;
    let inner = state.inner.read().await;
    Ok(Json(inner.comments.get(&name).cloned().unwrap_or_default()))
}

pub async fn add_comment(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<TextRequest>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    ensure_certificate(&state, &name)?;
    let comment = Comment {
        text: non_empty_text(request.text)?,
        created_at: Utc::now(),
    };

    let mut inner = state.inner.write().await;
    inner
        .comments
        .entry(name)
        .or_default()
        .push(comment.clone());

    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> AppResult<(StatusCode, Json<Feedback>)> {
    let feedback = Feedback {
        id: Uuid::new_v4(),
        text: non_empty_text(request.text)?,
        created_at: Utc::now(),
    };

    let mut inner = state.inner.write().await;
    inner.feedback.push(feedback.clone());
    tracing::info!(feedback_id = %feedback.id, total = inner.feedback.len(), "Feedback received");

    Ok((StatusCode::CREATED, Json(feedback)))
}
