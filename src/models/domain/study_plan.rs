use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use crate::models::domain::validation::validate_non_blank;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

/// Study plan in the shape the browser dashboard reads.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlanItem {
    pub id: String,
    pub title: String,
    pub level: String,
    pub status: PlanStatus,
    pub completion_percentage: u8,
    pub completed_modules: Vec<String>,
    pub quiz_scores: BTreeMap<String, f64>,
    pub created_at: String,
}

/// Plan as produced by the model. Only `title` is mandatory; everything else
/// is filled in by [`StudyPlanItem::from_generated`] when missing or unusable.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    #[serde(default)]
    pub id: Option<Value>,
    #[validate(custom(function = "validate_non_blank"))]
    pub title: String,
    #[serde(default)]
    pub level: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub completion_percentage: Option<Value>,
    #[serde(default)]
    pub completed_modules: Option<Value>,
    #[serde(default)]
    pub quiz_scores: Option<Value>,
    #[serde(default)]
    pub created_at: Option<Value>,
}

impl StudyPlanItem {
    pub fn from_generated(plan: GeneratedPlan, requested_level: &str) -> Self {
        let id = match plan.id {
            Some(Value::String(id)) if !id.trim().is_empty() => id,
            Some(Value::Number(id)) => id.to_string(),
            _ => Uuid::new_v4().to_string(),
        };

        let status: PlanStatus = lenient(plan.status);

        let completion_percentage = plan
            .completion_percentage
            .and_then(|pct| pct.as_u64())
            .filter(|pct| *pct <= 100)
            .map(|pct| pct as u8)
            .unwrap_or(0);

        StudyPlanItem {
            id,
            title: plan.title,
            level: non_blank(plan.level).unwrap_or_else(|| requested_level.to_string()),
            status,
            completion_percentage,
            completed_modules: lenient(plan.completed_modules),
            quiz_scores: lenient(plan.quiz_scores),
            created_at: non_blank(plan.created_at)
                .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}

// Optional fields that fail to parse fall back to their default instead of
// rejecting the plan.
fn lenient<T: DeserializeOwned + Default>(value: Option<Value>) -> T {
    value
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default()
}

fn non_blank(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text),
        _ => None,
    }
}
