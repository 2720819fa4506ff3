use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::validation::validate_non_blank;

pub const OPTION_COUNT: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    #[validate(custom(function = "validate_non_blank"))]
    pub question: String,
    #[validate(custom(function = "validate_options"))]
    pub options: Vec<String>,
    #[validate(range(max = 3))]
    pub correct_answer: u8, // 0-based index into options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// A final-exam item is a regular multiple-choice question tagged with the
/// subject it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FinalExamQuestion {
    #[validate(custom(function = "validate_non_blank"))]
    pub subject: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub question: QuizQuestion,
}

fn validate_options(options: &[String]) -> Result<(), ValidationError> {
    if options.len() != OPTION_COUNT {
        return Err(ValidationError::new("option_count"));
    }
    if options.iter().any(|option| option.trim().is_empty()) {
        return Err(ValidationError::new("empty_option"));
    }
    Ok(())
}
