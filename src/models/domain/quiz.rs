use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{quiz_question::QuizQuestion, validation::validate_non_blank};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct Quiz {
    #[validate(custom(function = "validate_non_blank"))]
    pub title: String,
    #[validate(length(min = 1), nested)]
    pub questions: Vec<QuizQuestion>,
}
