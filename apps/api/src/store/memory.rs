use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{new_answer_rows, new_profile_row, new_recommendation_row, Store};
use crate::errors::AppError;
use crate::models::profile::{NewProfile, ProfileRow};
use crate::models::progress::{LearningProgressRow, ProgressUpdate};
use crate::models::quiz::{AnswerInput, QuizAnswerRow};
use crate::models::recommendation::{sort_for_listing, RecommendationRow};
use crate::recommendation::formatter::FormattedBlocks;
use crate::recommendation::validator::SkillRecommendation;

/// In-process store. Tables are append-ordered vectors so insertion order
/// breaks timestamp ties the same way the SQL ordering does.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    profiles: Vec<ProfileRow>,
    answers: Vec<QuizAnswerRow>,
    recommendations: Vec<RecommendationRow>,
    progress: Vec<LearningProgressRow>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_profile(&self, profile: NewProfile) -> Result<ProfileRow, AppError> {
        let row = new_profile_row(profile);
        self.tables.write().await.profiles.push(row.clone());
        Ok(row)
    }

    async fn latest_profile(
        &self,
        external_user_ref: &str,
    ) -> Result<Option<ProfileRow>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .profiles
            .iter()
            .rev()
            .find(|p| p.external_user_ref == external_user_ref)
            .cloned())
    }

    async fn record_answers(
        &self,
        profile_id: Uuid,
        answers: &[AnswerInput],
    ) -> Result<Vec<QuizAnswerRow>, AppError> {
        let rows = new_answer_rows(profile_id, answers);
        self.tables.write().await.answers.extend(rows.iter().cloned());
        Ok(rows)
    }

    async fn list_answers(&self, profile_id: Uuid) -> Result<Vec<QuizAnswerRow>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .answers
            .iter()
            .filter(|a| a.profile_id == profile_id)
            .cloned()
            .collect())
    }

    async fn save_recommendation(
        &self,
        profile_id: Uuid,
        record: &SkillRecommendation,
        blocks: &FormattedBlocks,
    ) -> Result<RecommendationRow, AppError> {
        let row = new_recommendation_row(profile_id, record, blocks);
        self.tables.write().await.recommendations.push(row.clone());
        Ok(row)
    }

    async fn list_recommendations(
        &self,
        profile_id: Uuid,
    ) -> Result<Vec<RecommendationRow>, AppError> {
        let tables = self.tables.read().await;
        // Newest first before the stable sort, so equal timestamps keep recency order.
        let mut rows: Vec<_> = tables
            .recommendations
            .iter()
            .rev()
            .filter(|r| r.profile_id == profile_id)
            .cloned()
            .collect();
        sort_for_listing(&mut rows);
        Ok(rows)
    }

    async fn upsert_progress(
        &self,
        profile_id: Uuid,
        update: ProgressUpdate,
    ) -> Result<LearningProgressRow, AppError> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();

        if let Some(existing) = tables
            .progress
            .iter_mut()
            .find(|p| p.profile_id == profile_id && p.skill_id == update.skill_id)
        {
            existing.progress_percentage = update.progress_percentage;
            existing.completed_projects = update.completed_projects;
            existing.notes = update.notes;
            existing.updated_at = now;
            return Ok(existing.clone());
        }

        let row = LearningProgressRow {
            id: Uuid::new_v4(),
            profile_id,
            skill_id: update.skill_id,
            progress_percentage: update.progress_percentage,
            completed_projects: update.completed_projects,
            notes: update.notes,
            created_at: now,
            updated_at: now,
        };
        tables.progress.push(row.clone());
        Ok(row)
    }

    async fn list_progress(&self, profile_id: Uuid) -> Result<Vec<LearningProgressRow>, AppError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<_> = tables
            .progress
            .iter()
            .rev()
            .filter(|p| p.profile_id == profile_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(rows)
    }
}
