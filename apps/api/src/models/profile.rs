use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A student's profile. One active profile per user: the most recently created one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub external_user_ref: String,
    pub name: String,
    pub age: i32,
    /// Presentational only; stored as given.
    pub education_level: String,
    pub interests: String,
    pub strategic_preference: String,
    pub created_at: DateTime<Utc>,
}

/// The strategic preference a student states during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategicPreference {
    ThrivingEconomy,
    AmbitiousNation,
    VibrantSociety,
    All,
}

impl StrategicPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategicPreference::ThrivingEconomy => "thriving_economy",
            StrategicPreference::AmbitiousNation => "ambitious_nation",
            StrategicPreference::VibrantSociety => "vibrant_society",
            StrategicPreference::All => "all",
        }
    }
}

/// Profile fields accepted at creation, after validation.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub external_user_ref: String,
    pub name: String,
    pub age: i32,
    pub education_level: String,
    pub interests: String,
    pub strategic_preference: StrategicPreference,
}

pub const MIN_AGE: i32 = 13;
pub const MAX_AGE: i32 = 30;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategic_preference_serde_matches_as_str() {
        for pref in [
            StrategicPreference::ThrivingEconomy,
            StrategicPreference::AmbitiousNation,
            StrategicPreference::VibrantSociety,
            StrategicPreference::All,
        ] {
            let json = serde_json::to_value(pref).unwrap();
            assert_eq!(json, serde_json::json!(pref.as_str()));
        }
    }

    #[test]
    fn test_unknown_strategic_preference_rejected() {
        let result: Result<StrategicPreference, _> = serde_json::from_str("\"green_future\"");
        assert!(result.is_err());
    }
}
