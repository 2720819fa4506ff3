use validator::ValidationError;

/// Text fields coming back from the model must carry something other than
/// whitespace.
pub fn validate_non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
