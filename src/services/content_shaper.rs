use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use validator::Validate;

use crate::models::domain::{
    content_request::{ContentRequest, ShapedContent},
    flashcard::{Flashcard, GeneratedFlashcard},
    module_content::ModuleContent,
    quiz::Quiz,
    quiz_question::FinalExamQuestion,
    study_plan::{GeneratedPlan, StudyPlanItem},
};

/// Reasons an upstream payload is rejected. Any of them makes the whole
/// response unusable; nothing is partially accepted.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("missing or non-array field `{0}`")]
    MissingList(&'static str),

    #[error("`{0}` must not be empty")]
    EmptyList(&'static str),

    #[error("unexpected structure: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("invalid content: {0}")]
    Invalid(#[from] validator::ValidationErrors),

    #[error("quick question refers to missing slide {0}")]
    DanglingQuickQuestion(usize),
}

pub type ShapeResult<T> = Result<T, ShapeError>;

pub fn shape(request: &ContentRequest, value: Value) -> ShapeResult<ShapedContent> {
    match request {
        ContentRequest::Plan(params) => shape_plans(value, &params.level).map(ShapedContent::Plan),
        ContentRequest::Flashcards(_) => shape_flashcards(value).map(ShapedContent::Flashcards),
        ContentRequest::Quiz(_) => shape_quiz(value).map(ShapedContent::Quiz),
        ContentRequest::FinalExam(_) => shape_final_exam(value).map(ShapedContent::FinalExam),
        ContentRequest::ModuleContent(_) => {
            shape_module_content(value).map(ShapedContent::ModuleContent)
        }
    }
}

/// Accepts a bare array, `{"plans": [...]}` or `{"plan": {...}}`.
pub fn shape_plans(value: Value, requested_level: &str) -> ShapeResult<Vec<StudyPlanItem>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match (map.remove("plans"), map.remove("plan")) {
            (Some(Value::Array(items)), _) => items,
            (_, Some(plan @ Value::Object(_))) => vec![plan],
            _ => return Err(ShapeError::MissingList("plans")),
        },
        _ => return Err(ShapeError::MissingList("plans")),
    };

    let plans: Vec<GeneratedPlan> = parse_list(items, "plans")?;
    Ok(plans
        .into_iter()
        .map(|plan| StudyPlanItem::from_generated(plan, requested_level))
        .collect())
}

pub fn shape_flashcards(value: Value) -> ShapeResult<Vec<Flashcard>> {
    let items = take_list(value, "flashcards")?;
    let cards: Vec<GeneratedFlashcard> = parse_list(items, "flashcards")?;

    Ok(cards
        .into_iter()
        .enumerate()
        .map(|(index, card)| Flashcard::from_generated(index, card))
        .collect())
}

pub fn shape_quiz(value: Value) -> ShapeResult<Quiz> {
    parse_validated(value)
}

pub fn shape_final_exam(value: Value) -> ShapeResult<Vec<FinalExamQuestion>> {
    let items = take_list(value, "questions")?;
    parse_list(items, "questions")
}

pub fn shape_module_content(value: Value) -> ShapeResult<ModuleContent> {
    let content: ModuleContent = parse_validated(value)?;

    if let Some(questions) = &content.quick_questions {
        for question in questions.values() {
            question.validate()?;
        }
    }
    if let Some(index) = content.dangling_quick_question() {
        return Err(ShapeError::DanglingQuickQuestion(index));
    }

    Ok(content)
}

fn take_list(value: Value, key: &'static str) -> ShapeResult<Vec<Value>> {
    match value {
        Value::Object(mut map) => match map.remove(key) {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(ShapeError::MissingList(key)),
        },
        _ => Err(ShapeError::MissingList(key)),
    }
}

fn parse_list<T>(items: Vec<Value>, key: &'static str) -> ShapeResult<Vec<T>>
where
    T: DeserializeOwned + Validate,
{
    if items.is_empty() {
        return Err(ShapeError::EmptyList(key));
    }
    items.into_iter().map(parse_validated).collect()
}

fn parse_validated<T>(value: Value) -> ShapeResult<T>
where
    T: DeserializeOwned + Validate,
{
    let parsed: T = serde_json::from_value(value)?;
    parsed.validate()?;
    Ok(parsed)
}
