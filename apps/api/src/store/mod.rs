//! Persistence seam. Every read and write of profiles, quiz answers,
//! recommendations and progress goes through the `Store` trait.
//!
//! `PgStore` is the production backend. `MemoryStore` keeps the same ordering
//! contracts in process and backs tests and database-less local runs.
//!
//! `AppState` holds an `Arc<dyn Store>`, chosen at startup from config.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{NewProfile, ProfileRow};
use crate::models::progress::{LearningProgressRow, ProgressUpdate};
use crate::models::quiz::{AnswerInput, QuizAnswerRow};
use crate::models::recommendation::RecommendationRow;
use crate::recommendation::formatter::FormattedBlocks;
use crate::recommendation::validator::SkillRecommendation;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait Store: Send + Sync {
    async fn create_profile(&self, profile: NewProfile) -> Result<ProfileRow, AppError>;

    /// The caller's active profile: the most recently created one.
    async fn latest_profile(&self, external_user_ref: &str)
        -> Result<Option<ProfileRow>, AppError>;

    /// Appends one submission's answers in a single batch, preserving order.
    async fn record_answers(
        &self,
        profile_id: Uuid,
        answers: &[AnswerInput],
    ) -> Result<Vec<QuizAnswerRow>, AppError>;

    /// Full answer history for a profile, oldest first.
    async fn list_answers(&self, profile_id: Uuid) -> Result<Vec<QuizAnswerRow>, AppError>;

    /// Single insert, never an update.
    async fn save_recommendation(
        &self,
        profile_id: Uuid,
        record: &SkillRecommendation,
        blocks: &FormattedBlocks,
    ) -> Result<RecommendationRow, AppError>;

    /// Confidence descending, then newest first.
    async fn list_recommendations(
        &self,
        profile_id: Uuid,
    ) -> Result<Vec<RecommendationRow>, AppError>;

    async fn upsert_progress(
        &self,
        profile_id: Uuid,
        update: ProgressUpdate,
    ) -> Result<LearningProgressRow, AppError>;

    /// Most recently updated first.
    async fn list_progress(&self, profile_id: Uuid) -> Result<Vec<LearningProgressRow>, AppError>;
}

fn new_profile_row(profile: NewProfile) -> ProfileRow {
    ProfileRow {
        id: Uuid::new_v4(),
        external_user_ref: profile.external_user_ref,
        name: profile.name,
        age: profile.age,
        education_level: profile.education_level,
        interests: profile.interests,
        strategic_preference: profile.strategic_preference.as_str().to_string(),
        created_at: Utc::now(),
    }
}

fn new_answer_rows(profile_id: Uuid, answers: &[AnswerInput]) -> Vec<QuizAnswerRow> {
    let created_at = Utc::now();
    answers
        .iter()
        .enumerate()
        .map(|(position, answer)| QuizAnswerRow {
            id: Uuid::new_v4(),
            profile_id,
            question_id: answer.question_id.clone(),
            response_text: answer.response.clone(),
            position: position as i32,
            created_at,
        })
        .collect()
}

fn new_recommendation_row(
    profile_id: Uuid,
    record: &SkillRecommendation,
    blocks: &FormattedBlocks,
) -> RecommendationRow {
    RecommendationRow {
        id: Uuid::new_v4(),
        profile_id,
        skill_name: record.skill_name.clone(),
        skill_category: record.skill_category.clone(),
        pillar: record.pillar.as_str().to_string(),
        confidence_score: record.confidence_score,
        description: record.description.clone(),
        learning_path_text: blocks.learning_path.clone(),
        mini_project_text: blocks.mini_project.clone(),
        created_at: Utc::now(),
    }
}
