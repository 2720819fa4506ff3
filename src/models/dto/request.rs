use serde::Deserialize;
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::errors::{AppError, AppResult};
use crate::models::domain::content_request::{
    ContentRequest, FinalExamParams, ModuleTarget, PlanParams,
};

// Fields are taken as raw JSON so that one badly typed field is reported (or
// ignored) on its own instead of failing extraction of the whole body.

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequestDto {
    #[validate(required, custom(function = "validate_text"))]
    pub level: Option<Value>,

    #[validate(required, custom(function = "validate_preferences"))]
    pub preferences: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRequestDto {
    #[validate(required, custom(function = "validate_text"))]
    pub module_id: Option<Value>,

    pub topic: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalExamRequestDto {
    pub plan_id: Option<Value>,
    pub level: Option<Value>,
}

/// Strings are used as sent; numbers are accepted as their decimal text.
/// Anything else, including blank strings, counts as absent.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn validate_text(value: &Value) -> Result<(), ValidationError> {
    match text(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("text")),
    }
}

fn validate_preferences(preferences: &Value) -> Result<(), ValidationError> {
    if !preferences.is_object() {
        return Err(ValidationError::new("object"));
    }
    Ok(())
}

impl TryFrom<PlanRequestDto> for PlanParams {
    type Error = AppError;

    fn try_from(dto: PlanRequestDto) -> AppResult<Self> {
        dto.validate()?;

        match (dto.level.as_ref().and_then(text), dto.preferences) {
            (Some(level), Some(Value::Object(preferences))) => Ok(PlanParams { level, preferences }),
            _ => Err(AppError::ValidationError(
                "level and preferences required".to_string(),
            )),
        }
    }
}

impl TryFrom<ModuleRequestDto> for ModuleTarget {
    type Error = AppError;

    fn try_from(dto: ModuleRequestDto) -> AppResult<Self> {
        dto.validate()?;

        let module_id = dto
            .module_id
            .as_ref()
            .and_then(text)
            .ok_or_else(|| AppError::ValidationError("moduleId required".to_string()))?;
        Ok(ModuleTarget::new(module_id, dto.topic.as_ref().and_then(text)))
    }
}

impl From<FinalExamRequestDto> for FinalExamParams {
    fn from(dto: FinalExamRequestDto) -> Self {
        FinalExamParams::new(
            dto.plan_id.as_ref().and_then(text),
            dto.level.as_ref().and_then(text),
        )
    }
}

impl TryFrom<PlanRequestDto> for ContentRequest {
    type Error = AppError;

    fn try_from(dto: PlanRequestDto) -> AppResult<Self> {
        Ok(ContentRequest::Plan(dto.try_into()?))
    }
}

impl From<FinalExamRequestDto> for ContentRequest {
    fn from(dto: FinalExamRequestDto) -> Self {
        ContentRequest::FinalExam(dto.into())
    }
}
