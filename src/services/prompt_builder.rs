use serde_json::Value;

use crate::{
    constants::prompts::{
        ARABIC_ONLY_CLAUSE, FINAL_EXAM_SYSTEM_PROMPT, FLASHCARDS_SYSTEM_PROMPT,
        MODULE_CONTENT_SYSTEM_PROMPT, PLAN_SYSTEM_PROMPT, QUIZ_SYSTEM_PROMPT,
    },
    models::domain::content_request::{ContentRequest, ModuleTarget},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptPair {
    pub system_prompt: String,
    pub user_prompt: String,
}

impl PromptPair {
    fn new(instruction: &str, user_prompt: String) -> Self {
        Self {
            system_prompt: format!("{}\n\n{}", ARABIC_ONLY_CLAUSE, instruction),
            user_prompt,
        }
    }
}

pub fn build_prompt(request: &ContentRequest) -> PromptPair {
    match request {
        ContentRequest::Plan(params) => {
            let preferences = Value::Object(params.preferences.clone()).to_string();
            PromptPair::new(
                &PLAN_SYSTEM_PROMPT.replace("{level}", &params.level),
                format!(
                    "Create one study plan for level: {}. Preferences: {}. Return JSON object with key \"plans\" containing one plan. Title in Arabic.",
                    params.level, preferences
                ),
            )
        }
        ContentRequest::Flashcards(target) => PromptPair::new(
            FLASHCARDS_SYSTEM_PROMPT,
            module_prompt(target, "Write all front and back text in Arabic."),
        ),
        ContentRequest::Quiz(target) => PromptPair::new(
            QUIZ_SYSTEM_PROMPT,
            module_prompt(
                target,
                "Write title, all questions, and all four options for each question in Arabic.",
            ),
        ),
        ContentRequest::FinalExam(params) => PromptPair::new(
            FINAL_EXAM_SYSTEM_PROMPT,
            format!(
                "Plan: {}. Level: {}. Write all subjects, questions, and four options per question in Arabic. Return only valid JSON.",
                params.plan_id, params.level
            ),
        ),
        ContentRequest::ModuleContent(target) => PromptPair::new(
            MODULE_CONTENT_SYSTEM_PROMPT,
            module_prompt(
                target,
                "Write all slide titles, content, examples, and keyPoints in Arabic.",
            ),
        ),
    }
}

fn module_prompt(target: &ModuleTarget, language_note: &str) -> String {
    format!(
        "Module: {}. Topic: {}. {} Return only valid JSON.",
        target.module_id, target.topic, language_note
    )
}
