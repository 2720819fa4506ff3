use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        completion_client::{CompletionClient, OpenAiCompletionClient},
        content_service::ContentService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub content_service: Arc<ContentService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = Arc::new(OpenAiCompletionClient::new(&config));
        Self::with_client(config, client)
    }

    /// Builds the state around an existing completion client. The client is
    /// shared read-only by every request.
    pub fn with_client(config: Config, client: Arc<dyn CompletionClient>) -> Self {
        Self {
            content_service: Arc::new(ContentService::new(client)),
            config: Arc::new(config),
        }
    }
}
