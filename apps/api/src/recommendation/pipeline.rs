//! Quiz submission: orchestrates the recommendation pipeline for one submission.
//!
//! Flow: resolve profile → persist answers → read back latest answers →
//!       build prompt → generate → validate → format → store.
//!
//! Sequential and request-scoped. Answers persisted before a later failure stay
//! persisted; nothing from validation onward is written unless every step passes.
//! One submission makes exactly one generation call, with no retry.

use std::fmt;

use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::CallerIdentity;
use crate::errors::AppError;
use crate::llm_client::{Generator, ResponseFormat};
use crate::models::quiz::{latest_answers, AnswerInput};
use crate::models::recommendation::RecommendationRow;
use crate::quiz::catalog::{check_answers, CatalogMismatch};
use crate::recommendation::formatter::format_blocks;
use crate::recommendation::prompt_builder::build_prompt;
use crate::recommendation::validator::{excerpt, validate_output, OutputError};
use crate::store::Store;

/// Characters of raw model output kept in failure logs.
const RAW_EXCERPT_CHARS: usize = 300;

/// Where a submission is in its lifecycle. Logged on every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStage {
    Received,
    AnswersPersisted,
    PromptBuilt,
    GenerationRequested,
    GenerationFailed,
    GenerationSucceeded,
    ValidationFailed,
    Normalized,
    Formatted,
    Stored,
}

impl fmt::Display for SubmissionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmissionStage::Received => "received",
            SubmissionStage::AnswersPersisted => "answers_persisted",
            SubmissionStage::PromptBuilt => "prompt_built",
            SubmissionStage::GenerationRequested => "generation_requested",
            SubmissionStage::GenerationFailed => "generation_failed",
            SubmissionStage::GenerationSucceeded => "generation_succeeded",
            SubmissionStage::ValidationFailed => "validation_failed",
            SubmissionStage::Normalized => "normalized",
            SubmissionStage::Formatted => "formatted",
            SubmissionStage::Stored => "stored",
        };
        f.write_str(name)
    }
}

fn enter(profile_id: Uuid, stage: SubmissionStage) {
    info!(%profile_id, %stage, "quiz submission");
}

/// Runs the full pipeline for one quiz submission and returns the stored recommendation.
pub async fn submit_quiz(
    store: &dyn Store,
    generator: &dyn Generator,
    caller: &CallerIdentity,
    answers: &[AnswerInput],
) -> Result<RecommendationRow, AppError> {
    let profile = store
        .latest_profile(&caller.user_ref)
        .await?
        .ok_or(AppError::ProfileNotFound)?;
    enter(profile.id, SubmissionStage::Received);

    for mismatch in check_answers(answers) {
        match mismatch {
            CatalogMismatch::UnknownQuestion { question_id } => {
                warn!(profile_id = %profile.id, %question_id, "answer for unknown question")
            }
            CatalogMismatch::UnknownOption {
                question_id,
                response,
            } => warn!(
                profile_id = %profile.id, %question_id, %response,
                "answer is not one of the offered options"
            ),
        }
    }

    store.record_answers(profile.id, answers).await?;
    enter(profile.id, SubmissionStage::AnswersPersisted);

    // Read back so the prompt sees exactly what was persisted.
    let history = store.list_answers(profile.id).await?;
    let current = latest_answers(&history);
    let prompt = build_prompt(&profile, &current);
    enter(profile.id, SubmissionStage::PromptBuilt);

    enter(profile.id, SubmissionStage::GenerationRequested);
    let raw = match generator.generate(&prompt, ResponseFormat::JsonObject).await {
        Ok(raw) => raw,
        Err(e) => {
            enter(profile.id, SubmissionStage::GenerationFailed);
            warn!(profile_id = %profile.id, error = %e, "generation failed");
            return Err(e.into());
        }
    };
    enter(profile.id, SubmissionStage::GenerationSucceeded);

    let record = match validate_output(&raw) {
        Ok(record) => record,
        Err(e) => {
            enter(profile.id, SubmissionStage::ValidationFailed);
            let raw_excerpt = excerpt(&raw, RAW_EXCERPT_CHARS);
            match &e {
                OutputError::Malformed(source) => warn!(
                    profile_id = %profile.id, error = %source, raw = %raw_excerpt,
                    "generated output is not JSON"
                ),
                OutputError::SchemaMismatch { field, reason } => warn!(
                    profile_id = %profile.id, %field, %reason, raw = %raw_excerpt,
                    "generated output does not match schema"
                ),
            }
            return Err(e.into());
        }
    };
    enter(profile.id, SubmissionStage::Normalized);

    let blocks = format_blocks(&record);
    enter(profile.id, SubmissionStage::Formatted);

    let saved = store
        .save_recommendation(profile.id, &record, &blocks)
        .await?;
    enter(profile.id, SubmissionStage::Stored);

    info!(
        "Stored recommendation {} ({}, {}, confidence {:.2}) for profile {}",
        saved.id, saved.skill_name, saved.pillar, saved.confidence_score, profile.id
    );

    Ok(saved)
}
