use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::content_request::{ContentRequest, ModuleTarget},
        dto::request::{FinalExamRequestDto, ModuleRequestDto, PlanRequestDto},
    },
};

// A missing or unparsable body is handled as `{}`, so required-field checks
// decide the response rather than the JSON extractor.
fn body_or_default<T: Default>(body: Option<web::Json<T>>) -> T {
    body.map(web::Json::into_inner).unwrap_or_default()
}

async fn respond(state: &AppState, request: ContentRequest) -> Result<HttpResponse, AppError> {
    let content = state.content_service.generate(request).await?;
    Ok(HttpResponse::Ok().json(content))
}

#[post("/plan")]
pub async fn generate_plan(
    state: web::Data<AppState>,
    body: Option<web::Json<PlanRequestDto>>,
) -> Result<HttpResponse, AppError> {
    state.content_service.ensure_configured()?;
    let request = ContentRequest::try_from(body_or_default(body))?;
    respond(&state, request).await
}

#[post("/flashcards")]
pub async fn generate_flashcards(
    state: web::Data<AppState>,
    body: Option<web::Json<ModuleRequestDto>>,
) -> Result<HttpResponse, AppError> {
    state.content_service.ensure_configured()?;
    let target = ModuleTarget::try_from(body_or_default(body))?;
    respond(&state, ContentRequest::Flashcards(target)).await
}

#[post("/quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    body: Option<web::Json<ModuleRequestDto>>,
) -> Result<HttpResponse, AppError> {
    state.content_service.ensure_configured()?;
    let target = ModuleTarget::try_from(body_or_default(body))?;
    respond(&state, ContentRequest::Quiz(target)).await
}

#[post("/final-exam")]
pub async fn generate_final_exam(
    state: web::Data<AppState>,
    body: Option<web::Json<FinalExamRequestDto>>,
) -> Result<HttpResponse, AppError> {
    state.content_service.ensure_configured()?;
    let request = ContentRequest::from(body_or_default(body));
    respond(&state, request).await
}

#[post("/module-content")]
pub async fn generate_module_content(
    state: web::Data<AppState>,
    body: Option<web::Json<ModuleRequestDto>>,
) -> Result<HttpResponse, AppError> {
    state.content_service.ensure_configured()?;
    let target = ModuleTarget::try_from(body_or_default(body))?;
    respond(&state, ContentRequest::ModuleContent(target)).await
}
