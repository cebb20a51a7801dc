//! HTTP collaborator for the Gemini `generateContent` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{GenerateContentRequest, GenerateContentResponse};
use tracing::{debug, warn};
use url::Url;

use crate::{chat::ChatCollaborator, error::ChatError};

pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-preview-09-2025";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_key: api_key.into(),
        }
    }
}

pub fn generate_content_url(config: &GeminiConfig) -> Result<Url, ChatError> {
    let invalid = |reason: String| ChatError::InvalidEndpoint {
        endpoint: config.endpoint.clone(),
        reason,
    };

    let base = format!("{}/", config.endpoint.trim().trim_end_matches('/'));
    let base = Url::parse(&base).map_err(|err| invalid(err.to_string()))?;
    let mut url = base
        .join(&format!("v1beta/models/{}:generateContent", config.model.trim()))
        .map_err(|err| invalid(err.to_string()))?;
    url.query_pairs_mut().append_pair("key", &config.api_key);
    Ok(url)
}

pub struct GeminiClient {
    http: Client,
    url: Url,
    model: String,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, ChatError> {
        Self::with_http(Client::new(), config)
    }

    pub fn with_http(http: Client, config: GeminiConfig) -> Result<Self, ChatError> {
        if config.api_key.trim().is_empty() {
            return Err(ChatError::MissingCredential);
        }
        let url = generate_content_url(&config)?;
        Ok(Self {
            http,
            url,
            model: config.model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatCollaborator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ChatError> {
        debug!(model = %self.model, "sending generateContent request");
        let response = self
            .http
            .post(self.url.clone())
            .json(&GenerateContentRequest::single_prompt(prompt))
            .send()
            .await?;

        // Error payloads are still JSON; they simply lack candidates.
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), model = %self.model, "generateContent returned an error status");
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|err| ChatError::Decode(err.to_string()))?;
        Ok(parsed.first_text().map(str::to_string))
    }
}
