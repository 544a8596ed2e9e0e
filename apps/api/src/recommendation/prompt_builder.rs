//! Prompt Builder: renders a profile and its quiz answers into the single
//! instruction sent to the generative backend.
//!
//! Pure: no I/O, no clock, no randomness. Identical inputs yield byte-identical prompts.

use crate::llm_client::prompts::{ENCOURAGING_TONE_INSTRUCTION, FREE_RESOURCES_INSTRUCTION};
use crate::models::profile::ProfileRow;
use crate::models::quiz::QuizAnswerRow;
use crate::recommendation::prompts::{
    ADVISOR_ROLE, GUIDELINES, NO_RESPONSES_PLACEHOLDER, OUTPUT_SCHEMA, TASK_INSTRUCTIONS,
};

/// Builds the recommendation prompt. Answers are rendered in the order given;
/// an empty set yields a valid prompt with fewer clues.
pub fn build_prompt(profile: &ProfileRow, answers: &[QuizAnswerRow]) -> String {
    let profile_block = format!(
        "Student Profile:\n\
         - Name: {}\n\
         - Age: {}\n\
         - Education Level: {}\n\
         - Current Interests: {}\n\
         - Vision 2030 Preference: {}",
        profile.name,
        profile.age,
        profile.education_level,
        profile.interests,
        profile.strategic_preference,
    );

    let responses = if answers.is_empty() {
        NO_RESPONSES_PLACEHOLDER.to_string()
    } else {
        answers
            .iter()
            .map(|a| format!("{}: {}", a.question_id, a.response_text))
            .collect::<Vec<_>>()
            .join("\n")
    };

    [
        ADVISOR_ROLE.to_string(),
        profile_block,
        format!("Quiz Responses:\n{responses}"),
        TASK_INSTRUCTIONS.to_string(),
        OUTPUT_SCHEMA.to_string(),
        GUIDELINES.to_string(),
        FREE_RESOURCES_INSTRUCTION.to_string(),
        ENCOURAGING_TONE_INSTRUCTION.to_string(),
    ]
    .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::fixtures::{sample_answers, sample_profile};

    #[test]
    fn test_prompt_is_deterministic() {
        let profile = sample_profile();
        let answers = sample_answers(profile.id);
        assert_eq!(build_prompt(&profile, &answers), build_prompt(&profile, &answers));
    }

    #[test]
    fn test_prompt_embeds_profile_fields_verbatim() {
        let profile = sample_profile();
        let prompt = build_prompt(&profile, &[]);
        assert!(prompt.contains("- Name: Sara\n"));
        assert!(prompt.contains("- Age: 17\n"));
        assert!(prompt.contains("- Education Level: High School Student\n"));
        assert!(prompt.contains("- Current Interests: robotics, AI\n"));
        assert!(prompt.contains("- Vision 2030 Preference: thriving_economy"));
    }

    #[test]
    fn test_prompt_joins_answers_with_newlines_in_order() {
        let profile = sample_profile();
        let answers = sample_answers(profile.id);
        let prompt = build_prompt(&profile, &answers);

        let expected = answers
            .iter()
            .map(|a| format!("{}: {}", a.question_id, a.response_text))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(prompt.contains(&format!("Quiz Responses:\n{expected}\n\n")));
    }

    #[test]
    fn test_prompt_with_no_answers_is_well_formed() {
        let prompt = build_prompt(&sample_profile(), &[]);
        assert!(prompt.contains(&format!("Quiz Responses:\n{NO_RESPONSES_PLACEHOLDER}")));
        assert!(prompt.contains("\"vision_2030_pillar\""));
    }

    #[test]
    fn test_prompt_states_output_contract() {
        let prompt = build_prompt(&sample_profile(), &[]);
        for field in [
            "skill_name",
            "skill_category",
            "confidence_score",
            "mini_project",
            "learning_plan",
            "free_resources",
            "how_to_start",
            "vision_2030_connection",
        ] {
            assert!(prompt.contains(field), "prompt is missing `{field}`");
        }
        for pillar in ["Thriving Economy", "Ambitious Nation", "Vibrant Society"] {
            assert!(prompt.contains(pillar));
        }
        assert!(prompt.contains("FREE resources only"));
    }

    #[test]
    fn test_prompt_changes_with_answers() {
        let profile = sample_profile();
        let mut answers = sample_answers(profile.id);
        let before = build_prompt(&profile, &answers);
        answers[0].response_text = "Research extensively before taking any action".to_string();
        assert_ne!(before, build_prompt(&profile, &answers));
    }
}
