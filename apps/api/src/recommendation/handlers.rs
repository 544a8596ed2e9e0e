//! Axum route handlers for quiz submission and recommendation history.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::auth::CallerIdentity;
use crate::errors::AppError;
use crate::models::quiz::AnswerInput;
use crate::models::recommendation::RecommendationRow;
use crate::recommendation::pipeline::submit_quiz;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitQuizRequest {
    pub responses: Vec<AnswerInput>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationListResponse {
    pub recommendations: Vec<RecommendationRow>,
}

/// POST /api/v1/quiz/submit
///
/// Persists the answers, generates one recommendation and returns it.
pub async fn handle_submit_quiz(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Json(request): Json<SubmitQuizRequest>,
) -> Result<(StatusCode, Json<RecommendationRow>), AppError> {
    let saved = submit_quiz(
        state.store.as_ref(),
        state.generator.as_ref(),
        &caller,
        &request.responses,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /api/v1/recommendations
///
/// Confidence descending, then newest first. Empty when the caller has no profile yet.
pub async fn handle_list_recommendations(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<RecommendationListResponse>, AppError> {
    let recommendations = match state.store.latest_profile(&caller.user_ref).await? {
        Some(profile) => state.store.list_recommendations(profile.id).await?,
        None => Vec::new(),
    };

    Ok(Json(RecommendationListResponse { recommendations }))
}
