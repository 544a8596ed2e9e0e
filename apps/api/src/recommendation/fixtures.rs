//! Shared test fixtures: the "Sara" profile, a full quiz and a valid generated result.

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::llm_client::{Generator, LlmError, ResponseFormat};
use crate::models::profile::{NewProfile, ProfileRow, StrategicPreference};
use crate::models::quiz::{AnswerInput, QuizAnswerRow};
use crate::quiz::catalog::QUESTIONS;
use crate::recommendation::formatter::{format_blocks, FormattedBlocks};
use crate::recommendation::validator::{validate_output, SkillRecommendation};

pub fn sample_new_profile(user_ref: &str) -> NewProfile {
    NewProfile {
        external_user_ref: user_ref.to_string(),
        name: "Sara".to_string(),
        age: 17,
        education_level: "High School Student".to_string(),
        interests: "robotics, AI".to_string(),
        strategic_preference: StrategicPreference::ThrivingEconomy,
    }
}

pub fn sample_profile() -> ProfileRow {
    ProfileRow {
        id: Uuid::from_u128(0x5a7a),
        external_user_ref: "user-sara".to_string(),
        name: "Sara".to_string(),
        age: 17,
        education_level: "High School Student".to_string(),
        interests: "robotics, AI".to_string(),
        strategic_preference: "thriving_economy".to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap(),
    }
}

/// One answer per catalog question, picking a different option per question.
pub fn sample_answer_inputs() -> Vec<AnswerInput> {
    QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, q)| AnswerInput {
            question_id: q.id.to_string(),
            response: q.options[i % q.options.len()].to_string(),
        })
        .collect()
}

pub fn sample_answers(profile_id: Uuid) -> Vec<QuizAnswerRow> {
    let created_at = Utc.with_ymd_and_hms(2026, 1, 1, 9, 5, 0).unwrap();
    sample_answer_inputs()
        .into_iter()
        .enumerate()
        .map(|(i, a)| QuizAnswerRow {
            id: Uuid::from_u128(i as u128 + 1),
            profile_id,
            question_id: a.question_id,
            response_text: a.response,
            position: i as i32,
            created_at,
        })
        .collect()
}

pub fn sample_output() -> Value {
    json!({
        "skill": {
            "skill_name": "Robotics Programming",
            "skill_category": "Technology",
            "vision_2030_pillar": "Thriving Economy",
            "confidence_score": 0.92,
            "description": "Sara's love of robotics and systematic problem solving make robotics programming a natural fit.",
            "mini_project": {
                "title": "Line-Following Robot",
                "description": "Build a small robot that follows a line using two sensors and an Arduino.",
                "estimated_time": "2-3 weeks",
                "difficulty": "Beginner"
            },
            "learning_plan": {
                "how_to_start": "Learn Python basics, then install the Arduino IDE and blink an LED.",
                "free_resources": [
                    {
                        "title": "CS50's Introduction to Programming with Python",
                        "type": "Free Course",
                        "provider": "edX",
                        "url": "https://www.edx.org/cs50",
                        "description": "Search 'CS50 Python' on edX; covers Python from scratch."
                    },
                    {
                        "title": "Arduino Project Hub",
                        "type": "Tutorial Series",
                        "provider": "Arduino",
                        "url": "",
                        "description": "Open the Arduino website and browse Project Hub for beginner robots."
                    }
                ]
            },
            "vision_2030_connection": "Robotics underpins advanced manufacturing, a growth sector of the Thriving Economy pillar."
        }
    })
}

pub fn sample_record() -> SkillRecommendation {
    validate_output(&sample_output().to_string()).expect("fixture output is valid")
}

pub fn sample_blocks() -> FormattedBlocks {
    format_blocks(&sample_record())
}

/// What a `ScriptedGenerator` answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Empty,
    Unavailable,
}

/// Generator double: replies the same way every call and keeps the prompts it saw.
pub struct ScriptedGenerator {
    reply: Reply,
    pub prompts: tokio::sync::Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            prompts: tokio::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn valid() -> Self {
        Self::new(Reply::Text(sample_output().to_string()))
    }

    pub fn with_output(output: Value) -> Self {
        Self::new(Reply::Text(output.to_string()))
    }
}

#[async_trait::async_trait]
impl Generator for ScriptedGenerator {
    async fn generate(&self, prompt: &str, format: ResponseFormat) -> Result<String, LlmError> {
        assert_eq!(format, ResponseFormat::JsonObject);
        self.prompts.lock().await.push(prompt.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Empty => Err(LlmError::EmptyContent),
            Reply::Unavailable => Err(LlmError::Api {
                status: 503,
                message: "upstream overloaded".to_string(),
            }),
        }
    }
}
