use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Learning progress on one recommended skill. One row per (profile, skill_id).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LearningProgressRow {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub skill_id: Uuid,
    pub progress_percentage: i32,
    pub completed_projects: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    pub skill_id: Uuid,
    pub progress_percentage: i32,
    pub completed_projects: String,
    pub notes: String,
}
