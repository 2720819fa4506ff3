use std::env;

use actix_web::http::Uri;
use secrecy::SecretString;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: Option<SecretString>,
    pub openai_model: String,
    pub openai_base_url: Option<String>,
    pub api_token: Option<SecretString>,
    /// `None` allows any origin.
    pub cors_allowed_origins: Option<Vec<String>>,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: non_empty_var("OPENAI_API_KEY").map(SecretString::from),
            openai_model: non_empty_var("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            openai_base_url: non_empty_var("OPENAI_BASE_URL"),
            api_token: non_empty_var("AI_API_TOKEN").map(SecretString::from),
            cors_allowed_origins: non_empty_var("CORS_ALLOWED_ORIGINS")
                .and_then(|origins| parse_origins(&origins)),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .or_else(|_| env::var("PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
        }
    }

    /// Whether the completion backend has a credential. Without one every
    /// `/ai/*` endpoint answers 503 but the process keeps running.
    pub fn is_ai_configured(&self) -> bool {
        self.openai_api_key.is_some()
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: Some(SecretString::from("sk-test".to_string())),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            openai_base_url: None,
            api_token: None,
            cors_allowed_origins: None,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 4000,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

// `*` anywhere in the list means any origin. Entries that are not valid
// URIs are dropped with a warning so they cannot stop the workers from
// starting.
pub(crate) fn parse_origins(raw: &str) -> Option<Vec<String>> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .collect();

    if origins.contains(&"*") {
        log::info!("CORS_ALLOWED_ORIGINS contains '*' - allowing any origin");
        return None;
    }

    Some(
        origins
            .into_iter()
            .filter(|origin| match origin.parse::<Uri>() {
                Ok(_) => true,
                Err(err) => {
                    log::warn!("Ignoring invalid CORS origin {:?}: {}", origin, err);
                    false
                }
            })
            .map(str::to_string)
            .collect(),
    )
}
