use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use actix_web::{http::StatusCode, test, web, App};
use async_trait::async_trait;
use secrecy::SecretString;
use serde_json::{json, Value};

use afaq_ai_server::{
    app_state::AppState,
    config::Config,
    handlers,
    services::{
        completion_client::{CompletionClient, CompletionError},
        prompt_builder::PromptPair,
    },
};

/// Completion client that replays queued answers and counts calls.
struct ScriptedClient {
    configured: bool,
    responses: Mutex<VecDeque<Result<Value, CompletionError>>>,
    calls: AtomicUsize,
}

impl ScriptedClient {
    fn new(responses: Vec<Result<Value, CompletionError>>) -> Arc<Self> {
        Arc::new(Self {
            configured: true,
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
        })
    }

    fn unconfigured() -> Arc<Self> {
        Arc::new(Self {
            configured: false,
            responses: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn complete(&self, _prompt: &PromptPair) -> Result<Value, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .unwrap_or(Err(CompletionError::EmptyResponse))
    }
}

fn test_config() -> Config {
    Config {
        openai_api_key: Some(SecretString::from("sk-test".to_string())),
        openai_model: "gpt-4o-mini".to_string(),
        openai_base_url: None,
        api_token: None,
        cors_allowed_origins: None,
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 4000,
    }
}

macro_rules! app_with {
    ($config:expr, $client:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::with_client($config, $client.clone())))
                .configure(handlers::configure),
        )
        .await
    };
}

fn quiz_payload(title: &str) -> Value {
    let question = json!({
        "question": "ما ناتج ٥ × ٦؟",
        "options": ["٢٥", "٣٠", "٣٥", "٤٠"],
        "correctAnswer": 1
    });
    json!({
        "title": title,
        "questions": [question.clone(), question.clone(), question.clone(), question.clone(), question]
    })
}

#[actix_web::test]
async fn every_ai_endpoint_is_unavailable_without_credential() {
    let client = ScriptedClient::unconfigured();
    let app = app_with!(test_config(), client);

    let cases = [
        ("/ai/plan", json!({ "level": "beginner", "preferences": {} })),
        ("/ai/flashcards", json!({ "moduleId": "m1" })),
        ("/ai/quiz", json!({ "moduleId": "m1" })),
        ("/ai/final-exam", json!({ "planId": "p1" })),
        ("/ai/module-content", json!({ "moduleId": "m1" })),
    ];

    for (uri, body) in cases {
        let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE, "{uri}");
    }

    assert_eq!(client.calls(), 0);
}

#[actix_web::test]
async fn health_is_ok_even_without_credential() {
    let client = ScriptedClient::unconfigured();
    let app = app_with!(test_config(), client);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "ok": true }));
}

#[actix_web::test]
async fn plan_with_missing_fields_never_reaches_the_model() {
    let client = ScriptedClient::new(vec![]);
    let app = app_with!(test_config(), client);

    for body in [
        json!({ "preferences": { "goals": [] } }),
        json!({ "level": "beginner" }),
        json!({}),
    ] {
        let req = test::TestRequest::post()
            .uri("/ai/plan")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    assert_eq!(client.calls(), 0);
}

#[actix_web::test]
async fn quiz_missing_questions_is_unavailable() {
    let client = ScriptedClient::new(vec![Ok(json!({ "title": "اختبار ناقص" }))]);
    let app = app_with!(test_config(), client);

    let req = test::TestRequest::post()
        .uri("/ai/quiz")
        .set_json(json!({ "moduleId": "algebra" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(client.calls(), 1);
}

#[actix_web::test]
async fn well_formed_quiz_is_passed_through() {
    let payload = quiz_payload("اختبار الضرب");
    let client = ScriptedClient::new(vec![Ok(payload.clone())]);
    let app = app_with!(test_config(), client);

    let req = test::TestRequest::post()
        .uri("/ai/quiz")
        .set_json(json!({ "moduleId": "algebra", "topic": "الضرب" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, payload);
}

#[actix_web::test]
async fn flashcards_are_reindexed_sequentially() {
    let client = ScriptedClient::new(vec![Ok(json!({
        "flashcards": [
            { "id": "z9", "front": "ما الخلية؟", "back": "وحدة بناء الكائن الحي" },
            { "id": "z9", "front": "ما النواة؟", "back": "مركز التحكم في الخلية" },
            { "id": 42, "front": "ما الميتوكوندريا؟", "back": "مصنع الطاقة" }
        ]
    }))]);
    let app = app_with!(test_config(), client);

    let req = test::TestRequest::post()
        .uri("/ai/flashcards")
        .set_json(json!({ "moduleId": "biology-1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let ids: Vec<&str> = body
        .as_array()
        .expect("bare array")
        .iter()
        .filter_map(|card| card["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[actix_web::test]
async fn module_content_with_empty_slides_is_unavailable() {
    let client = ScriptedClient::new(vec![Ok(json!({ "title": "الكيمياء", "slides": [] }))]);
    let app = app_with!(test_config(), client);

    let req = test::TestRequest::post()
        .uri("/ai/module-content")
        .set_json(json!({ "moduleId": "chem-1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_web::test]
async fn repeated_requests_are_not_cached() {
    let client = ScriptedClient::new(vec![
        Ok(quiz_payload("النسخة الأولى")),
        Ok(quiz_payload("النسخة الثانية")),
    ]);
    let app = app_with!(test_config(), client);

    let mut titles = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/ai/quiz")
            .set_json(json!({ "moduleId": "algebra" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        titles.push(body["title"].clone());
    }

    assert_eq!(client.calls(), 2);
    assert_ne!(titles[0], titles[1]);
}

#[actix_web::test]
async fn concurrent_requests_each_call_the_model() {
    let client = ScriptedClient::new(vec![
        Ok(quiz_payload("أ")),
        Ok(quiz_payload("ب")),
        Ok(quiz_payload("ج")),
    ]);
    let app = app_with!(test_config(), client);

    let request = || {
        test::TestRequest::post()
            .uri("/ai/quiz")
            .set_json(json!({ "moduleId": "algebra" }))
            .to_request()
    };

    let (a, b, c) = tokio::join!(
        test::call_service(&app, request()),
        test::call_service(&app, request()),
        test::call_service(&app, request()),
    );

    assert!(a.status().is_success());
    assert!(b.status().is_success());
    assert!(c.status().is_success());
    assert_eq!(client.calls(), 3);
}

#[actix_web::test]
async fn upstream_failure_is_unavailable_and_server_keeps_serving() {
    let client = ScriptedClient::new(vec![
        Err(CompletionError::Upstream("rate limited".to_string())),
        Ok(json!({ "plans": [{ "title": "خطة جديدة" }] })),
    ]);
    let app = app_with!(test_config(), client);

    let body = json!({ "level": "beginner", "preferences": { "studyDays": ["sat"] } });

    let req = test::TestRequest::post()
        .uri("/ai/plan")
        .set_json(body.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["error"], "Failed to generate plan");

    let req = test::TestRequest::post()
        .uri("/ai/plan")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let plans: Value = test::read_body_json(resp).await;
    assert_eq!(plans[0]["title"], "خطة جديدة");
    assert_eq!(plans[0]["level"], "beginner");
}

#[actix_web::test]
async fn api_token_guards_ai_routes_but_not_health() {
    let config = Config {
        api_token: Some(SecretString::from("afaq-token".to_string())),
        ..test_config()
    };
    let client = ScriptedClient::new(vec![Ok(quiz_payload("اختبار"))]);
    let app = app_with!(config, client);

    let req = test::TestRequest::post()
        .uri("/ai/quiz")
        .set_json(json!({ "moduleId": "algebra" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(client.calls(), 0);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/ai/quiz")
        .insert_header(("Authorization", "Bearer afaq-token"))
        .set_json(json!({ "moduleId": "algebra" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(client.calls(), 1);
}
