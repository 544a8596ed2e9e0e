use axum::{extract::State, Json};
use serde::Serialize;

use crate::auth::CallerIdentity;
use crate::errors::AppError;
use crate::models::quiz::QuizAnswerRow;
use crate::quiz::catalog::{QuizQuestion, QUESTIONS};
use crate::state::AppState;

#[derive(Serialize)]
pub struct QuestionsResponse {
    pub questions: &'static [QuizQuestion],
}

#[derive(Serialize)]
pub struct AnswersResponse {
    pub answers: Vec<QuizAnswerRow>,
}

/// GET /api/v1/quiz/questions
pub async fn handle_list_questions() -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        questions: &QUESTIONS,
    })
}

/// GET /api/v1/quiz/answers
///
/// Every persisted answer for the caller's profile, oldest first. Answers stay
/// here even when a submission failed downstream.
pub async fn handle_list_answers(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<AnswersResponse>, AppError> {
    let profile = state
        .store
        .latest_profile(&caller.user_ref)
        .await?
        .ok_or(AppError::ProfileNotFound)?;

    let answers = state.store.list_answers(profile.id).await?;
    Ok(Json(AnswersResponse { answers }))
}
