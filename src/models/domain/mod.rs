pub mod content_request;
pub mod flashcard;
pub mod module_content;
pub mod quiz;
pub mod quiz_question;
pub mod study_plan;
pub mod validation;
pub use content_request::{ContentKind, ContentRequest, ShapedContent};
pub use flashcard::Flashcard;
pub use module_content::{ModuleContent, Slide};
pub use quiz::Quiz;
pub use quiz_question::{FinalExamQuestion, QuizQuestion};
pub use study_plan::StudyPlanItem;
