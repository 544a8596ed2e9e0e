use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::{new_answer_rows, new_profile_row, new_recommendation_row, Store};
use crate::errors::AppError;
use crate::models::profile::{NewProfile, ProfileRow};
use crate::models::progress::{LearningProgressRow, ProgressUpdate};
use crate::models::quiz::{AnswerInput, QuizAnswerRow};
use crate::models::recommendation::RecommendationRow;
use crate::recommendation::formatter::FormattedBlocks;
use crate::recommendation::validator::SkillRecommendation;

/// Highest confidence first, then newest. `seq` makes the order total.
const LIST_RECOMMENDATIONS_SQL: &str = r#"
    SELECT * FROM recommendations
    WHERE profile_id = $1
    ORDER BY confidence_score DESC, created_at DESC, seq DESC
"#;

/// PostgreSQL-backed store. All statements are parameterized.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_profile(&self, profile: NewProfile) -> Result<ProfileRow, AppError> {
        let row = new_profile_row(profile);

        let saved = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles
                (id, external_user_ref, name, age, education_level, interests,
                 strategic_preference, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(row.id)
        .bind(&row.external_user_ref)
        .bind(&row.name)
        .bind(row.age)
        .bind(&row.education_level)
        .bind(&row.interests)
        .bind(&row.strategic_preference)
        .bind(row.created_at)
        .fetch_one(&self.pool)
        .await?;

        info!("Created profile {} for user {}", saved.id, saved.external_user_ref);
        Ok(saved)
    }

    async fn latest_profile(
        &self,
        external_user_ref: &str,
    ) -> Result<Option<ProfileRow>, AppError> {
        Ok(sqlx::query_as::<_, ProfileRow>(
            "SELECT * FROM profiles WHERE external_user_ref = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(external_user_ref)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn record_answers(
        &self,
        profile_id: Uuid,
        answers: &[AnswerInput],
    ) -> Result<Vec<QuizAnswerRow>, AppError> {
        let rows = new_answer_rows(profile_id, answers);
        let mut tx = self.pool.begin().await?;
        let mut saved = Vec::with_capacity(rows.len());

        for row in &rows {
            let inserted = sqlx::query_as::<_, QuizAnswerRow>(
                r#"
                INSERT INTO quiz_answers
                    (id, profile_id, question_id, response_text, position, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING *
                "#,
            )
            .bind(row.id)
            .bind(row.profile_id)
            .bind(&row.question_id)
            .bind(&row.response_text)
            .bind(row.position)
            .bind(row.created_at)
            .fetch_one(&mut *tx)
            .await?;
            saved.push(inserted);
        }

        tx.commit().await?;
        Ok(saved)
    }

    async fn list_answers(&self, profile_id: Uuid) -> Result<Vec<QuizAnswerRow>, AppError> {
        Ok(sqlx::query_as::<_, QuizAnswerRow>(
            "SELECT * FROM quiz_answers WHERE profile_id = $1 ORDER BY created_at, position",
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn save_recommendation(
        &self,
        profile_id: Uuid,
        record: &SkillRecommendation,
        blocks: &FormattedBlocks,
    ) -> Result<RecommendationRow, AppError> {
        let row = new_recommendation_row(profile_id, record, blocks);

        Ok(sqlx::query_as::<_, RecommendationRow>(
            r#"
            INSERT INTO recommendations
                (id, profile_id, skill_name, skill_category, pillar, confidence_score,
                 description, learning_path_text, mini_project_text, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(row.id)
        .bind(row.profile_id)
        .bind(&row.skill_name)
        .bind(&row.skill_category)
        .bind(&row.pillar)
        .bind(row.confidence_score)
        .bind(&row.description)
        .bind(&row.learning_path_text)
        .bind(&row.mini_project_text)
        .bind(row.created_at)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn list_recommendations(
        &self,
        profile_id: Uuid,
    ) -> Result<Vec<RecommendationRow>, AppError> {
        Ok(sqlx::query_as::<_, RecommendationRow>(LIST_RECOMMENDATIONS_SQL)
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn upsert_progress(
        &self,
        profile_id: Uuid,
        update: ProgressUpdate,
    ) -> Result<LearningProgressRow, AppError> {
        Ok(sqlx::query_as::<_, LearningProgressRow>(
            r#"
            INSERT INTO learning_progress
                (id, profile_id, skill_id, progress_percentage, completed_projects, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (profile_id, skill_id) DO UPDATE SET
                progress_percentage = EXCLUDED.progress_percentage,
                completed_projects = EXCLUDED.completed_projects,
                notes = EXCLUDED.notes,
                updated_at = now()
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(profile_id)
        .bind(update.skill_id)
        .bind(update.progress_percentage)
        .bind(&update.completed_projects)
        .bind(&update.notes)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn list_progress(&self, profile_id: Uuid) -> Result<Vec<LearningProgressRow>, AppError> {
        Ok(sqlx::query_as::<_, LearningProgressRow>(
            "SELECT * FROM learning_progress WHERE profile_id = $1 ORDER BY updated_at DESC",
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_listing_order_is_total() {
        let order_by = LIST_RECOMMENDATIONS_SQL
            .split("ORDER BY")
            .nth(1)
            .unwrap()
            .trim();
        assert_eq!(order_by, "confidence_score DESC, created_at DESC, seq DESC");
    }
}
