use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Reference data
        .route("/taxonomy", get(handlers::get_taxonomy))
        .route("/certificates", get(handlers::get_certificates))
        .route("/certificates/:name", get(handlers::get_certificate))
        .route(
            "/certificates/:name/comments",
            get(handlers::get_comments).post(handlers::add_comment),
        )
        // Recommendations
        .route("/recommendations", post(handlers::recommend))
        // Sessions
        .route("/sessions", post(handlers::create_session))
        .route("/sessions/:id", get(handlers::get_session))
        .route("/sessions/:id/acquired", post(handlers::add_acquired))
        .route(
            "/sessions/:id/acquired/:name",
            delete(handlers::remove_acquired),
        )
        // Alumni statistics and internships
        .route("/alumni", get(handlers::get_alumni_stats))
        .route("/internships/search", post(handlers::search_internships))
        .route("/feedback", post(handlers::submit_feedback))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
