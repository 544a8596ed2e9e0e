//! The fixed question set shown by the quiz front end.
//!
//! Answers are not required to match the catalog; mismatches are only reported
//! so that drift between front end and backend shows up in the logs.

use serde::Serialize;

use crate::models::quiz::AnswerInput;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub question: &'static str,
    pub options: [&'static str; 5],
}

pub const QUESTIONS: [QuizQuestion; 10] = [
    QuizQuestion {
        id: "problem_solving",
        question: "When faced with a complex problem, what is your preferred approach?",
        options: [
            "Break it down into smaller parts and tackle each systematically",
            "Research extensively before taking any action",
            "Brainstorm creative solutions with others",
            "Use tried-and-tested methods that have worked before",
            "Experiment with different approaches until one works",
        ],
    },
    QuizQuestion {
        id: "technology_comfort",
        question: "How comfortable are you with learning new technologies?",
        options: [
            "Very comfortable - I love exploring new tech",
            "Somewhat comfortable - I can adapt when needed",
            "Neutral - depends on the technology",
            "Prefer to stick with what I know well",
            "I find technology challenging but I try",
        ],
    },
    QuizQuestion {
        id: "work_environment",
        question: "What type of work environment energizes you most?",
        options: [
            "Collaborative team settings with lots of interaction",
            "Independent work with minimal supervision",
            "Fast-paced environments with constant change",
            "Structured environments with clear processes",
            "Creative spaces that encourage innovation",
        ],
    },
    QuizQuestion {
        id: "communication_style",
        question: "How do you prefer to communicate ideas?",
        options: [
            "Visual presentations and infographics",
            "Written reports and documentation",
            "Verbal discussions and meetings",
            "Hands-on demonstrations",
            "Digital platforms and social media",
        ],
    },
    QuizQuestion {
        id: "learning_preference",
        question: "What is your preferred way of learning new skills?",
        options: [
            "Online courses and tutorials",
            "Hands-on practice and experimentation",
            "Reading books and articles",
            "Learning from mentors and experts",
            "Group workshops and seminars",
        ],
    },
    QuizQuestion {
        id: "future_impact",
        question: "What kind of impact do you want to make in the future?",
        options: [
            "Solve environmental and sustainability challenges",
            "Improve healthcare and quality of life",
            "Advance technology and innovation",
            "Enhance education and knowledge sharing",
            "Strengthen communities and social connections",
        ],
    },
    QuizQuestion {
        id: "saudi_vision_interest",
        question: "Which Saudi Vision 2030 initiative excites you most?",
        options: [
            "NEOM and smart city development",
            "Saudi Green Initiative and environmental projects",
            "Digital transformation and AI initiatives",
            "Cultural and entertainment sector growth",
            "Healthcare system modernization",
        ],
    },
    QuizQuestion {
        id: "skill_development",
        question: "When developing a new skill, you prefer:",
        options: [
            "Step-by-step structured learning paths",
            "Project-based learning with real outcomes",
            "Theoretical understanding first, then practice",
            "Learning alongside peers in groups",
            "Self-directed exploration and discovery",
        ],
    },
    QuizQuestion {
        id: "career_motivation",
        question: "What motivates you most in your career aspirations?",
        options: [
            "Making a positive impact on society",
            "Financial success and stability",
            "Recognition and professional achievement",
            "Continuous learning and growth",
            "Work-life balance and personal fulfillment",
        ],
    },
    QuizQuestion {
        id: "global_challenges",
        question: "Which global challenge would you most like to contribute to solving?",
        options: [
            "Climate change and environmental protection",
            "Healthcare accessibility and medical breakthroughs",
            "Education inequality and access to knowledge",
            "Economic development and poverty reduction",
            "Technology ethics and digital rights",
        ],
    },
];

pub fn find_question(id: &str) -> Option<&'static QuizQuestion> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// Why a submitted answer does not line up with the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogMismatch {
    UnknownQuestion { question_id: String },
    UnknownOption { question_id: String, response: String },
}

/// Reports every answer that is not one of the catalog's offered options.
pub fn check_answers(answers: &[AnswerInput]) -> Vec<CatalogMismatch> {
    answers
        .iter()
        .filter_map(|a| match find_question(&a.question_id) {
            None => Some(CatalogMismatch::UnknownQuestion {
                question_id: a.question_id.clone(),
            }),
            Some(q) if !q.options.contains(&a.response.as_str()) => {
                Some(CatalogMismatch::UnknownOption {
                    question_id: a.question_id.clone(),
                    response: a.response.clone(),
                })
            }
            Some(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<_> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), QUESTIONS.len());
    }

    #[test]
    fn test_check_answers_accepts_catalog_options() {
        let answers: Vec<AnswerInput> = QUESTIONS
            .iter()
            .map(|q| AnswerInput {
                question_id: q.id.to_string(),
                response: q.options[0].to_string(),
            })
            .collect();
        assert!(check_answers(&answers).is_empty());
    }

    #[test]
    fn test_check_answers_reports_unknowns() {
        let answers = vec![
            AnswerInput {
                question_id: "favourite_colour".to_string(),
                response: "Green".to_string(),
            },
            AnswerInput {
                question_id: "problem_solving".to_string(),
                response: "Ask a friend".to_string(),
            },
        ];
        let mismatches = check_answers(&answers);
        assert_eq!(mismatches.len(), 2);
        assert!(matches!(
            mismatches[0],
            CatalogMismatch::UnknownQuestion { .. }
        ));
        assert!(matches!(mismatches[1], CatalogMismatch::UnknownOption { .. }));
    }
}
