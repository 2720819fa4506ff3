use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{quiz_question::QuizQuestion, validation::validate_non_blank};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    #[validate(custom(function = "validate_non_blank"))]
    pub title: String,
    #[validate(custom(function = "validate_non_blank"))]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    pub key_points: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ModuleContent {
    #[validate(custom(function = "validate_non_blank"))]
    pub title: String,
    #[validate(length(min = 1), nested)]
    pub slides: Vec<Slide>,
    /// Optional check-your-understanding questions keyed by 0-based slide index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_questions: Option<BTreeMap<usize, QuizQuestion>>,
}

impl ModuleContent {
    /// Returns the first quick-question key that does not point at a slide.
    pub fn dangling_quick_question(&self) -> Option<usize> {
        self.quick_questions
            .as_ref()?
            .keys()
            .copied()
            .find(|index| *index >= self.slides.len())
    }
}
