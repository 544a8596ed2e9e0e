// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt that enforces JSON-only output. Sent with every
/// `ResponseFormat::JsonObject` request.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with a single valid JSON object only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction appended to recommendation prompts so every suggested resource is free.
pub const FREE_RESOURCES_INSTRUCTION: &str = "\
    CRITICAL: Recommend FREE resources only (YouTube channels, free Coursera or edX courses, \
    Khan Academy, official documentation, open tutorials). Never recommend paid courses, \
    subscriptions or books that must be purchased.";

/// Tone guidance for student-facing text.
pub const ENCOURAGING_TONE_INSTRUCTION: &str = "\
    Write for a teenage or young-adult student: encouraging, motivational and concrete. \
    Prefer short, actionable sentences over jargon.";
