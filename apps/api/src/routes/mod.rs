pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::profile::handlers as profile;
use crate::progress::handlers as progress;
use crate::quiz::handlers as quiz;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profiles
        .route("/api/v1/profiles", post(profile::handle_create_profile))
        .route("/api/v1/profiles/me", get(profile::handle_get_my_profile))
        // Quiz
        .route("/api/v1/quiz/questions", get(quiz::handle_list_questions))
        .route("/api/v1/quiz/answers", get(quiz::handle_list_answers))
        .route(
            "/api/v1/quiz/submit",
            post(recommendation::handle_submit_quiz),
        )
        // Recommendations
        .route(
            "/api/v1/recommendations",
            get(recommendation::handle_list_recommendations),
        )
        // Learning progress
        .route(
            "/api/v1/progress",
            get(progress::handle_list_progress).post(progress::handle_record_progress),
        )
        .with_state(state)
}
