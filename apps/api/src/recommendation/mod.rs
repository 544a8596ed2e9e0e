// Recommendation pipeline: prompt building, generation, validation,
// formatting and storage of one skill recommendation per quiz submission.
// All LLM calls go through llm_client, no direct HTTP calls here.

pub mod formatter;
pub mod handlers;
pub mod pipeline;
pub mod prompt_builder;
pub mod prompts;
pub mod validator;

#[cfg(test)]
pub mod fixtures;
