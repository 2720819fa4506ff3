use std::{panic::AssertUnwindSafe, sync::Arc};

use futures::FutureExt;

use crate::{
    errors::{AppError, AppResult},
    models::domain::content_request::{ContentKind, ContentRequest, ShapedContent},
    services::{completion_client::CompletionClient, content_shaper, prompt_builder},
};

pub const NOT_CONFIGURED_MESSAGE: &str = "OPENAI_API_KEY not configured";

pub struct ContentService {
    client: Arc<dyn CompletionClient>,
}

impl ContentService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Fails with 503 when no completion backend is configured. Runs before
    /// request validation so an unconfigured server answers every `/ai/*`
    /// call the same way.
    pub fn ensure_configured(&self) -> AppResult<()> {
        if !self.client.is_configured() {
            return Err(AppError::ServiceUnavailable(NOT_CONFIGURED_MESSAGE.to_string()));
        }
        Ok(())
    }

    /// Builds the prompt, calls the model once and shapes its answer. Every
    /// failure past this point, including a panic, becomes 503.
    pub async fn generate(&self, request: ContentRequest) -> AppResult<ShapedContent> {
        self.ensure_configured()?;

        let kind = request.kind();
        match AssertUnwindSafe(self.generate_inner(&request)).catch_unwind().await {
            Ok(Some(content)) => {
                log::info!("Generated {} with {} item(s)", kind, content.item_count());
                Ok(content)
            }
            Ok(None) => Err(generation_failed(kind)),
            Err(_) => {
                log::error!("Unexpected failure while generating {}", kind);
                Err(generation_failed(kind))
            }
        }
    }

    async fn generate_inner(&self, request: &ContentRequest) -> Option<ShapedContent> {
        let kind = request.kind();
        let prompt = prompt_builder::build_prompt(request);

        let value = match self.client.complete(&prompt).await {
            Ok(value) => value,
            Err(e) => {
                log::error!("Completion for {} failed: {}", kind, e);
                return None;
            }
        };

        match content_shaper::shape(request, value) {
            Ok(content) => Some(content),
            Err(e) => {
                log::warn!("Rejected {} response: {}", kind, e);
                None
            }
        }
    }
}

fn generation_failed(kind: ContentKind) -> AppError {
    AppError::ServiceUnavailable(format!("Failed to generate {}", kind))
}
