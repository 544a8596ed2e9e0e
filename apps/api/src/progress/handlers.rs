use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::CallerIdentity;
use crate::errors::AppError;
use crate::models::progress::{LearningProgressRow, ProgressUpdate};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecordProgressRequest {
    pub skill_id: Uuid,
    pub progress_percentage: i32,
    #[serde(default)]
    pub completed_projects: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProgressListResponse {
    pub progress: Vec<LearningProgressRow>,
}

impl RecordProgressRequest {
    fn into_update(self) -> Result<ProgressUpdate, AppError> {
        if !(0..=100).contains(&self.progress_percentage) {
            return Err(AppError::Validation(
                "progress_percentage must be between 0 and 100".to_string(),
            ));
        }
        Ok(ProgressUpdate {
            skill_id: self.skill_id,
            progress_percentage: self.progress_percentage,
            completed_projects: self.completed_projects.unwrap_or_default(),
            notes: self.notes.unwrap_or_default(),
        })
    }
}

/// POST /api/v1/progress
///
/// Upserts one progress row per (profile, skill_id).
pub async fn handle_record_progress(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Json(request): Json<RecordProgressRequest>,
) -> Result<Json<LearningProgressRow>, AppError> {
    let update = request.into_update()?;
    let profile = state
        .store
        .latest_profile(&caller.user_ref)
        .await?
        .ok_or(AppError::ProfileNotFound)?;

    let row = state.store.upsert_progress(profile.id, update).await?;
    Ok(Json(row))
}

/// GET /api/v1/progress
pub async fn handle_list_progress(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<ProgressListResponse>, AppError> {
    let progress = match state.store.latest_profile(&caller.user_ref).await? {
        Some(profile) => state.store.list_progress(profile.id).await?,
        None => Vec::new(),
    };
    Ok(Json(ProgressListResponse { progress }))
}
