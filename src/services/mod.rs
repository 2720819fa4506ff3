pub mod completion_client;
pub mod content_service;
pub mod content_shaper;
pub mod prompt_builder;
