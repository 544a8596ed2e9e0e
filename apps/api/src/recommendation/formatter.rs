//! Formatter: renders a normalized recommendation into the two opaque text
//! blocks that are stored alongside it. Pure and infallible.

use serde::Serialize;

use crate::recommendation::validator::{FreeResource, SkillRecommendation};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedBlocks {
    pub learning_path: String,
    pub mini_project: String,
}

pub fn format_blocks(record: &SkillRecommendation) -> FormattedBlocks {
    FormattedBlocks {
        learning_path: format_learning_path(record),
        mini_project: format_mini_project(record),
    }
}

pub fn format_learning_path(record: &SkillRecommendation) -> String {
    let resources = record
        .learning_plan
        .free_resources
        .iter()
        .enumerate()
        .map(|(i, r)| format_resource(i + 1, r))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "HOW TO GET STARTED:\n{}\n\nFREE LEARNING RESOURCES:\n\n{}\n\nVISION 2030 CONNECTION:\n{}",
        record.learning_plan.how_to_start, resources, record.vision_2030_connection
    )
    .trim()
    .to_string()
}

fn format_resource(index: usize, resource: &FreeResource) -> String {
    let locate = if resource.url.is_empty() {
        format!("Find it by: {}", resource.description)
    } else {
        format!("URL: {}", resource.url)
    };

    let mut lines = vec![
        format!("{index}. {} ({})", resource.title, resource.resource_type),
        format!("   Provider: {}", resource.provider),
        format!("   {locate}"),
    ];
    if !resource.description.is_empty() {
        lines.push(format!("   What you'll learn: {}", resource.description));
    }
    lines.join("\n")
}

pub fn format_mini_project(record: &SkillRecommendation) -> String {
    let project = &record.mini_project;
    format!(
        "MINI-PROJECT: {}\n\n{}\n\nEstimated Time: {}\nDifficulty Level: {}",
        project.title, project.description, project.estimated_time, project.difficulty
    )
    .trim()
    .to_string()
}
