use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::validation::validate_non_blank;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Flashcard {
    pub id: String,
    pub front: String,
    pub back: String,
}

/// Flashcard as produced by the model. Any upstream `id` is ignored; ids are
/// reassigned from position.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct GeneratedFlashcard {
    #[validate(custom(function = "validate_non_blank"))]
    pub front: String,
    #[validate(custom(function = "validate_non_blank"))]
    pub back: String,
}

impl Flashcard {
    pub fn from_generated(index: usize, card: GeneratedFlashcard) -> Self {
        Flashcard {
            id: (index + 1).to_string(),
            front: card.front,
            back: card.back,
        }
    }
}
