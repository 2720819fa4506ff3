use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::domain::{
    flashcard::Flashcard, module_content::ModuleContent, quiz::Quiz,
    quiz_question::FinalExamQuestion, study_plan::StudyPlanItem,
};

pub const DEFAULT_EXAM_LEVEL: &str = "intermediate";
pub const DEFAULT_EXAM_PLAN: &str = "general";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Plan,
    Flashcards,
    Quiz,
    FinalExam,
    ModuleContent,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Plan => write!(f, "plan"),
            ContentKind::Flashcards => write!(f, "flashcards"),
            ContentKind::Quiz => write!(f, "quiz"),
            ContentKind::FinalExam => write!(f, "final exam"),
            ContentKind::ModuleContent => write!(f, "module content"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlanParams {
    pub level: String,
    pub preferences: Map<String, Value>,
}

/// Module addressed by flashcard, quiz and slide requests. `topic` is
/// already resolved (falls back to the module id).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleTarget {
    pub module_id: String,
    pub topic: String,
}

impl ModuleTarget {
    pub fn new(module_id: impl Into<String>, topic: Option<String>) -> Self {
        let module_id = module_id.into();
        let topic = topic
            .filter(|topic| !topic.trim().is_empty())
            .unwrap_or_else(|| module_id.clone());
        Self { module_id, topic }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalExamParams {
    pub plan_id: String,
    pub level: String,
}

impl FinalExamParams {
    pub fn new(plan_id: Option<String>, level: Option<String>) -> Self {
        Self {
            plan_id: plan_id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_EXAM_PLAN.to_string()),
            level: level
                .filter(|level| !level.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_EXAM_LEVEL.to_string()),
        }
    }
}

/// A validated generation request. Built per HTTP call and dropped with it.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentRequest {
    Plan(PlanParams),
    Flashcards(ModuleTarget),
    Quiz(ModuleTarget),
    FinalExam(FinalExamParams),
    ModuleContent(ModuleTarget),
}

impl ContentRequest {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentRequest::Plan(_) => ContentKind::Plan,
            ContentRequest::Flashcards(_) => ContentKind::Flashcards,
            ContentRequest::Quiz(_) => ContentKind::Quiz,
            ContentRequest::FinalExam(_) => ContentKind::FinalExam,
            ContentRequest::ModuleContent(_) => ContentKind::ModuleContent,
        }
    }
}

/// Validated generation output. Serializes without a wrapper: arrays for
/// plans, flashcards and exams, objects for quizzes and module content.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ShapedContent {
    Plan(Vec<StudyPlanItem>),
    Flashcards(Vec<Flashcard>),
    Quiz(Quiz),
    FinalExam(Vec<FinalExamQuestion>),
    ModuleContent(ModuleContent),
}

impl ShapedContent {
    pub fn kind(&self) -> ContentKind {
        match self {
            ShapedContent::Plan(_) => ContentKind::Plan,
            ShapedContent::Flashcards(_) => ContentKind::Flashcards,
            ShapedContent::Quiz(_) => ContentKind::Quiz,
            ShapedContent::FinalExam(_) => ContentKind::FinalExam,
            ShapedContent::ModuleContent(_) => ContentKind::ModuleContent,
        }
    }

    /// Number of top-level items, used for logging.
    pub fn item_count(&self) -> usize {
        match self {
            ShapedContent::Plan(plans) => plans.len(),
            ShapedContent::Flashcards(cards) => cards.len(),
            ShapedContent::Quiz(quiz) => quiz.questions.len(),
            ShapedContent::FinalExam(questions) => questions.len(),
            ShapedContent::ModuleContent(content) => content.slides.len(),
        }
    }
}
