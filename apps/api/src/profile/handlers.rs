use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::auth::CallerIdentity;
use crate::errors::AppError;
use crate::models::profile::{NewProfile, ProfileRow, StrategicPreference, MAX_AGE, MIN_AGE};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateProfileRequest {
    pub name: String,
    pub age: i32,
    pub education_level: String,
    #[serde(alias = "current_interests")]
    pub interests: String,
    #[serde(alias = "vision_2030_preference")]
    pub strategic_preference: StrategicPreference,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: Option<ProfileRow>,
}

impl CreateProfileRequest {
    fn into_new_profile(self, caller: &CallerIdentity) -> Result<NewProfile, AppError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("name cannot be empty".to_string()));
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(AppError::Validation(format!(
                "age must be between {MIN_AGE} and {MAX_AGE}"
            )));
        }

        Ok(NewProfile {
            external_user_ref: caller.user_ref.clone(),
            name: name.to_string(),
            age: self.age,
            education_level: self.education_level,
            interests: self.interests,
            strategic_preference: self.strategic_preference,
        })
    }
}

/// POST /api/v1/profiles
///
/// Creates a new profile for the caller. The newest profile becomes the active one.
pub async fn handle_create_profile(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Json(request): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<ProfileRow>), AppError> {
    let new_profile = request.into_new_profile(&caller)?;
    let profile = state.store.create_profile(new_profile).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /api/v1/profiles/me
pub async fn handle_get_my_profile(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = state.store.latest_profile(&caller.user_ref).await?;
    Ok(Json(ProfileResponse { profile }))
}
