#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    /// A well-formed quiz answer with five questions.
    pub fn quiz_payload() -> Value {
        let questions: Vec<Value> = (0..5)
            .map(|i| {
                json!({
                    "question": format!("السؤال رقم {}", i + 1),
                    "options": ["الخيار الأول", "الخيار الثاني", "الخيار الثالث", "الخيار الرابع"],
                    "correctAnswer": i % 4
                })
            })
            .collect();

        json!({ "title": "اختبار الوحدة الأولى", "questions": questions })
    }

    /// Flashcards with upstream ids that must not survive shaping.
    pub fn flashcards_payload() -> Value {
        json!({
            "flashcards": [
                { "id": "a7", "front": "ما عاصمة المملكة؟", "back": "الرياض" },
                { "id": "a7", "front": "ما ناتج ٣ × ٣؟", "back": "٩" },
                { "id": "x", "front": "ما رمز الماء؟", "back": "H2O" },
                { "front": "ما وحدة الطاقة؟", "back": "الجول" }
            ]
        })
    }

    pub fn final_exam_payload() -> Value {
        let subjects = ["الرياضيات", "الفيزياء", "الكيمياء", "الأحياء", "اللغة العربية"];
        let questions: Vec<Value> = (0..10)
            .map(|i| {
                json!({
                    "subject": subjects[i % subjects.len()],
                    "question": format!("سؤال التحصيلي {}", i + 1),
                    "options": ["أ", "ب", "ج", "د"],
                    "correctAnswer": i % 4
                })
            })
            .collect();

        json!({ "questions": questions })
    }

    pub fn module_content_payload() -> Value {
        json!({
            "title": "قوانين نيوتن",
            "slides": [
                {
                    "title": "القانون الأول",
                    "content": "يبقى الجسم على حالته ما لم تؤثر عليه قوة.",
                    "example": "الراكب يندفع للأمام عند توقف السيارة.",
                    "keyPoints": ["القصور الذاتي"]
                },
                {
                    "title": "القانون الثاني",
                    "content": "القوة تساوي الكتلة في التسارع.",
                    "keyPoints": ["ق = ك × ت", "وحدة القوة نيوتن"]
                },
                {
                    "title": "القانون الثالث",
                    "content": "لكل فعل رد فعل مساوٍ له في المقدار ومعاكس في الاتجاه.",
                    "keyPoints": []
                }
            ]
        })
    }

    pub fn plan_payload() -> Value {
        json!({
            "plans": [{
                "id": "plan-1",
                "title": "خطة الاستعداد للتحصيلي",
                "level": "intermediate",
                "status": "not-started",
                "completionPercentage": 0,
                "completedModules": [],
                "quizScores": {},
                "createdAt": "2025-09-01T08:00:00.000Z"
            }]
        })
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_quiz_payload() {
        let quiz = quiz_payload();
        assert_eq!(quiz["questions"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn test_fixtures_final_exam_payload() {
        let exam = final_exam_payload();
        assert_eq!(exam["questions"].as_array().map(Vec::len), Some(10));
    }

    #[test]
    fn test_fixtures_flashcards_payload() {
        let cards = flashcards_payload();
        assert_eq!(cards["flashcards"].as_array().map(Vec::len), Some(4));
    }
}
