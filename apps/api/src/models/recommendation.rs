use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored skill recommendation. Append-only: never updated in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecommendationRow {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub skill_name: String,
    pub skill_category: String,
    pub pillar: String,
    pub confidence_score: f64,
    pub description: String,
    pub learning_path_text: String,
    pub mini_project_text: String,
    pub created_at: DateTime<Utc>,
}

/// The three strategic pillars a recommendation must map to. Closed set:
/// anything else is rejected, never coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pillar {
    #[serde(rename = "Thriving Economy")]
    ThrivingEconomy,
    #[serde(rename = "Ambitious Nation")]
    AmbitiousNation,
    #[serde(rename = "Vibrant Society")]
    VibrantSociety,
}

impl Pillar {
    pub const ALL: [Pillar; 3] = [
        Pillar::ThrivingEconomy,
        Pillar::AmbitiousNation,
        Pillar::VibrantSociety,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pillar::ThrivingEconomy => "Thriving Economy",
            Pillar::AmbitiousNation => "Ambitious Nation",
            Pillar::VibrantSociety => "Vibrant Society",
        }
    }

    /// Exact match on the display name.
    pub fn parse(value: &str) -> Option<Pillar> {
        Pillar::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orders recommendations by confidence descending, then newest first.
pub fn sort_for_listing(rows: &mut [RecommendationRow]) {
    rows.sort_by(|a, b| {
        b.confidence_score
            .total_cmp(&a.confidence_score)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn row(confidence: f64, created_at: DateTime<Utc>) -> RecommendationRow {
        RecommendationRow {
            id: Uuid::new_v4(),
            profile_id: Uuid::nil(),
            skill_name: "Data Analysis".to_string(),
            skill_category: "Technology".to_string(),
            pillar: Pillar::ThrivingEconomy.to_string(),
            confidence_score: confidence,
            description: String::new(),
            learning_path_text: String::new(),
            mini_project_text: String::new(),
            created_at,
        }
    }

    #[test]
    fn test_pillar_parse_exact_only() {
        assert_eq!(Pillar::parse("Vibrant Society"), Some(Pillar::VibrantSociety));
        assert_eq!(Pillar::parse("vibrant society"), None);
        assert_eq!(Pillar::parse("Green Future"), None);
    }

    #[test]
    fn test_pillar_serde_uses_display_names() {
        let json = serde_json::to_string(&Pillar::AmbitiousNation).unwrap();
        assert_eq!(json, "\"Ambitious Nation\"");
    }

    #[test]
    fn test_sort_for_listing_confidence_then_recency() {
        let now = Utc::now();
        let mut rows = vec![
            row(0.7, now - Duration::minutes(5)),
            row(0.9, now - Duration::minutes(10)),
            row(0.7, now),
        ];
        sort_for_listing(&mut rows);
        assert_eq!(rows[0].confidence_score, 0.9);
        assert_eq!(rows[1].created_at, now);
        assert_eq!(rows[2].created_at, now - Duration::minutes(5));
    }
}
