pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::career;
use crate::quiz;
use crate::state::AppState;
use crate::wellness;

// Uploaded CVs and lecture notes routinely exceed axum's 2 MB default.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Career tools
        .route("/api/analyze-cv", post(career::handlers::handle_analyze_cv))
        .route("/api/generate-jd", post(career::handlers::handle_generate_jd))
        .route(
            "/api/generate-cover-letter",
            post(career::handlers::handle_generate_cover_letter),
        )
        .route(
            "/api/interview-questions",
            post(career::handlers::handle_interview_questions),
        )
        // Quiz generation
        .route("/api/generate-quiz", post(quiz::handlers::handle_generate_quiz))
        // Wellness
        .route("/api/analyze-mood", post(wellness::handlers::handle_analyze_mood))
        .route(
            "/api/generate-break",
            post(wellness::handlers::handle_generate_break),
        )
        .route(
            "/api/generate-motivation",
            post(wellness::handlers::handle_generate_motivation),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
