use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One persisted quiz answer. Resubmissions append new rows; the latest per
/// question wins when answers are read back.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuizAnswerRow {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub question_id: String,
    pub response_text: String,
    /// Index within the submission that wrote this row.
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

/// A single `{question_id, response}` pair as submitted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerInput {
    pub question_id: String,
    #[serde(alias = "response_text")]
    pub response: String,
}

/// Collapses an answer history (oldest first) to the latest answer per question,
/// ordered by where that latest write sits in the history.
pub fn latest_answers(history: &[QuizAnswerRow]) -> Vec<QuizAnswerRow> {
    let mut last_index: HashMap<&str, usize> = HashMap::new();
    for (i, row) in history.iter().enumerate() {
        last_index.insert(row.question_id.as_str(), i);
    }

    history
        .iter()
        .enumerate()
        .filter(|(i, row)| last_index.get(row.question_id.as_str()) == Some(i))
        .map(|(_, row)| row.clone())
        .collect()
}
