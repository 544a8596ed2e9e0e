//! Result Validator: turns raw generated text into a fully-typed `SkillRecommendation`.
//!
//! Structured-output mode on the backend is a hint, not a guarantee, so every
//! field is checked here. The only repairs are cosmetic: code fences around the
//! JSON are stripped and strings are trimmed. Anything missing or mistyped
//! rejects the whole result.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::errors::AppError;
use crate::models::recommendation::Pillar;

// ────────────────────────────────────────────────────────────────────────────
// Normalized record
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillRecommendation {
    pub skill_name: String,
    pub skill_category: String,
    pub pillar: Pillar,
    /// Always within [0, 1].
    pub confidence_score: f64,
    pub description: String,
    pub mini_project: MiniProject,
    pub learning_plan: LearningPlan,
    pub vision_2030_connection: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MiniProject {
    pub title: String,
    pub description: String,
    pub estimated_time: String,
    pub difficulty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningPlan {
    pub how_to_start: String,
    /// Never empty.
    pub free_resources: Vec<FreeResource>,
}

/// A free learning resource. At least one of `url` and `description` is
/// non-empty; the description doubles as the locate-it instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreeResource {
    pub title: String,
    pub resource_type: String,
    pub provider: String,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("output is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("`{field}`: {reason}")]
    SchemaMismatch { field: String, reason: String },
}

impl OutputError {
    fn mismatch(field: impl Into<String>, reason: impl Into<String>) -> Self {
        OutputError::SchemaMismatch {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<OutputError> for AppError {
    fn from(err: OutputError) -> Self {
        match err {
            OutputError::Malformed(e) => AppError::MalformedOutput(e.to_string()),
            OutputError::SchemaMismatch { field, reason } => {
                AppError::SchemaMismatch { field, reason }
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

/// Parses and validates raw generated text.
///
/// Steps:
/// 1. parse as JSON → `Malformed` on failure
/// 2. extract the top-level `skill` object
/// 3. scalar fields: names, category, pillar (closed set), confidence in [0, 1]
/// 4. `mini_project` with title, description, estimated_time, difficulty
/// 5. `learning_plan` with how_to_start and at least one complete free resource
pub fn validate_output(raw: &str) -> Result<SkillRecommendation, OutputError> {
    let value: Value = serde_json::from_str(strip_json_fences(raw))?;

    let root = value
        .as_object()
        .ok_or_else(|| OutputError::mismatch("skill", "top-level value is not an object"))?;
    let skill = Fields::root(root).object("skill")?;

    let pillar_raw = skill.required_str("vision_2030_pillar")?;
    let pillar = Pillar::parse(&pillar_raw).ok_or_else(|| {
        OutputError::mismatch(
            skill.path("vision_2030_pillar"),
            format!("unknown pillar {pillar_raw:?}"),
        )
    })?;

    let confidence_score = skill.number("confidence_score")?;
    if !(0.0..=1.0).contains(&confidence_score) {
        return Err(OutputError::mismatch(
            skill.path("confidence_score"),
            format!("{confidence_score} is outside [0, 1]"),
        ));
    }

    let project = skill.object("mini_project")?;
    let mini_project = MiniProject {
        title: project.required_str("title")?,
        description: project.required_str("description")?,
        estimated_time: project.required_str("estimated_time")?,
        difficulty: project.required_str("difficulty")?,
    };

    let plan = skill.object("learning_plan")?;
    let how_to_start = plan.required_str("how_to_start")?;
    let resources = plan.array("free_resources")?;
    if resources.is_empty() {
        return Err(OutputError::mismatch(
            plan.path("free_resources"),
            "at least one free resource is required",
        ));
    }
    let free_resources = resources
        .iter()
        .enumerate()
        .map(|(i, v)| validate_resource(&plan.path(&format!("free_resources[{i}]")), v))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SkillRecommendation {
        skill_name: skill.required_str("skill_name")?,
        skill_category: skill.required_str("skill_category")?,
        pillar,
        confidence_score,
        description: skill.required_str("description")?,
        mini_project,
        learning_plan: LearningPlan {
            how_to_start,
            free_resources,
        },
        vision_2030_connection: skill.required_str("vision_2030_connection")?,
    })
}

fn validate_resource(path: &str, value: &Value) -> Result<FreeResource, OutputError> {
    let obj = value
        .as_object()
        .ok_or_else(|| OutputError::mismatch(path, "expected an object"))?;
    let fields = Fields {
        obj,
        prefix: path.to_string(),
    };

    let url = fields.optional_str("url")?;
    let description = fields.optional_str("description")?;
    // An empty URL is fine as long as there is a way to locate the resource.
    if url.is_empty() && description.is_empty() {
        return Err(OutputError::mismatch(
            fields.path("url"),
            "needs a URL or a description of how to find the resource",
        ));
    }

    Ok(FreeResource {
        title: fields.required_str("title")?,
        resource_type: fields.required_str("type")?,
        provider: fields.required_str("provider")?,
        url,
        description,
    })
}

/// A JSON object plus its dotted path, for field-level error messages.
struct Fields<'a> {
    obj: &'a Map<String, Value>,
    prefix: String,
}

impl<'a> Fields<'a> {
    fn root(obj: &'a Map<String, Value>) -> Self {
        Self {
            obj,
            prefix: String::new(),
        }
    }

    fn path(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.prefix, name)
        }
    }

    fn get(&self, name: &str) -> Result<&'a Value, OutputError> {
        match self.obj.get(name) {
            Some(Value::Null) | None => Err(OutputError::mismatch(self.path(name), "missing")),
            Some(v) => Ok(v),
        }
    }

    fn required_str(&self, name: &str) -> Result<String, OutputError> {
        let s = self
            .get(name)?
            .as_str()
            .ok_or_else(|| OutputError::mismatch(self.path(name), "expected a string"))?
            .trim();
        if s.is_empty() {
            return Err(OutputError::mismatch(self.path(name), "must not be empty"));
        }
        Ok(s.to_string())
    }

    /// Absent or null reads as an empty string; any other non-string is rejected.
    fn optional_str(&self, name: &str) -> Result<String, OutputError> {
        match self.obj.get(name) {
            None | Some(Value::Null) => Ok(String::new()),
            Some(Value::String(s)) => Ok(s.trim().to_string()),
            Some(_) => Err(OutputError::mismatch(self.path(name), "expected a string")),
        }
    }

    fn number(&self, name: &str) -> Result<f64, OutputError> {
        self.get(name)?
            .as_f64()
            .filter(|n| n.is_finite())
            .ok_or_else(|| OutputError::mismatch(self.path(name), "expected a number"))
    }

    fn object(&self, name: &str) -> Result<Fields<'a>, OutputError> {
        let obj = self
            .get(name)?
            .as_object()
            .ok_or_else(|| OutputError::mismatch(self.path(name), "expected an object"))?;
        Ok(Fields {
            obj,
            prefix: self.path(name),
        })
    }

    fn array(&self, name: &str) -> Result<&'a Vec<Value>, OutputError> {
        self.get(name)?
            .as_array()
            .ok_or_else(|| OutputError::mismatch(self.path(name), "expected an array"))
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// First `max_chars` characters of a raw response, for logs.
pub fn excerpt(raw: &str, max_chars: usize) -> String {
    let mut chars = raw.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::fixtures::sample_output;

    fn mismatch_field(result: Result<SkillRecommendation, OutputError>) -> String {
        match result {
            Err(OutputError::SchemaMismatch { field, .. }) => field,
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_output_normalizes() {
        let record = validate_output(&sample_output().to_string()).unwrap();
        assert_eq!(record.skill_name, "Robotics Programming");
        assert_eq!(record.pillar, Pillar::ThrivingEconomy);
        assert_eq!(record.confidence_score, 0.92);
        assert_eq!(record.mini_project.difficulty, "Beginner");
        assert_eq!(record.learning_plan.free_resources.len(), 2);
        assert_eq!(record.learning_plan.free_resources[0].resource_type, "Free Course");
    }

    #[test]
    fn test_non_json_is_malformed() {
        let result = validate_output("Sure! Here is a great skill for Sara: robotics.");
        assert!(matches!(result, Err(OutputError::Malformed(_))));
    }

    #[test]
    fn test_fenced_json_is_repaired() {
        let raw = format!("```json\n{}\n```", sample_output());
        assert!(validate_output(&raw).is_ok());
    }

    #[test]
    fn test_missing_skill_object() {
        let result = validate_output(r#"{"recommendation": {}}"#);
        assert_eq!(mismatch_field(result), "skill");
    }

    #[test]
    fn test_top_level_array_is_mismatch() {
        assert_eq!(mismatch_field(validate_output("[1, 2, 3]")), "skill");
    }

    #[test]
    fn test_missing_pillar() {
        let mut output = sample_output();
        output["skill"].as_object_mut().unwrap().remove("vision_2030_pillar");
        let result = validate_output(&output.to_string());
        assert_eq!(mismatch_field(result), "skill.vision_2030_pillar");
    }

    #[test]
    fn test_unknown_pillar_is_not_coerced() {
        let mut output = sample_output();
        output["skill"]["vision_2030_pillar"] = "Green Future".into();
        let result = validate_output(&output.to_string());
        assert_eq!(mismatch_field(result), "skill.vision_2030_pillar");
    }

    #[test]
    fn test_confidence_must_be_number() {
        let mut output = sample_output();
        output["skill"]["confidence_score"] = "high".into();
        let result = validate_output(&output.to_string());
        assert_eq!(mismatch_field(result), "skill.confidence_score");
    }

    #[test]
    fn test_confidence_out_of_range() {
        let mut output = sample_output();
        output["skill"]["confidence_score"] = 92.into();
        let result = validate_output(&output.to_string());
        assert_eq!(mismatch_field(result), "skill.confidence_score");
    }

    #[test]
    fn test_confidence_bounds_inclusive() {
        for score in [0.0, 1.0] {
            let mut output = sample_output();
            output["skill"]["confidence_score"] = score.into();
            assert!(validate_output(&output.to_string()).is_ok());
        }
    }

    #[test]
    fn test_empty_skill_name() {
        let mut output = sample_output();
        output["skill"]["skill_name"] = "   ".into();
        let result = validate_output(&output.to_string());
        assert_eq!(mismatch_field(result), "skill.skill_name");
    }

    #[test]
    fn test_mini_project_requires_difficulty() {
        let mut output = sample_output();
        output["skill"]["mini_project"]
            .as_object_mut()
            .unwrap()
            .remove("difficulty");
        let result = validate_output(&output.to_string());
        assert_eq!(mismatch_field(result), "skill.mini_project.difficulty");
    }

    #[test]
    fn test_learning_plan_requires_resources() {
        let mut output = sample_output();
        output["skill"]["learning_plan"]["free_resources"] = serde_json::json!([]);
        let result = validate_output(&output.to_string());
        assert_eq!(mismatch_field(result), "skill.learning_plan.free_resources");
    }

    #[test]
    fn test_learning_plan_requires_how_to_start() {
        let mut output = sample_output();
        output["skill"]["learning_plan"]["how_to_start"] = "".into();
        let result = validate_output(&output.to_string());
        assert_eq!(mismatch_field(result), "skill.learning_plan.how_to_start");
    }

    #[test]
    fn test_resource_missing_provider() {
        let mut output = sample_output();
        output["skill"]["learning_plan"]["free_resources"][1]
            .as_object_mut()
            .unwrap()
            .remove("provider");
        let result = validate_output(&output.to_string());
        assert_eq!(
            mismatch_field(result),
            "skill.learning_plan.free_resources[1].provider"
        );
    }

    #[test]
    fn test_empty_url_with_locate_instruction_is_valid() {
        let mut output = sample_output();
        output["skill"]["learning_plan"]["free_resources"][0]["url"] = "".into();
        let record = validate_output(&output.to_string()).unwrap();
        assert!(record.learning_plan.free_resources[0].url.is_empty());
        assert!(!record.learning_plan.free_resources[0].description.is_empty());
    }

    #[test]
    fn test_resource_without_url_or_description() {
        let mut output = sample_output();
        let resource = output["skill"]["learning_plan"]["free_resources"][0]
            .as_object_mut()
            .unwrap();
        resource.insert("url".to_string(), "".into());
        resource.remove("description");
        let result = validate_output(&output.to_string());
        assert_eq!(
            mismatch_field(result),
            "skill.learning_plan.free_resources[0].url"
        );
    }

    #[test]
    fn test_schema_mismatch_converts_to_app_error() {
        let err: AppError = OutputError::mismatch("skill.skill_name", "missing").into();
        assert!(matches!(err, AppError::SchemaMismatch { ref field, .. } if field == "skill.skill_name"));
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "  {\"key\": \"value\"}\n";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_excerpt_truncates_on_char_boundary() {
        assert_eq!(excerpt("abcdef", 3), "abc…");
        assert_eq!(excerpt("ab", 3), "ab");
        assert_eq!(excerpt("مرحبا بك", 2), "مر…");
    }
}
