pub mod persona;
pub mod shaper;

use log::{debug, info};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::web::models::{Message, Role};

pub const MODEL_ID: &str = "llama-3.1-8b-instant";
pub const TEMPERATURE: f32 = 0.8;
pub const MAX_TOKENS: u32 = 100;
pub const TOP_P: f32 = 0.9;

/// Substituted when the upstream reply carries no usable text.
pub const EMPTY_COMPLETION_FALLBACK: &str = "Hmm, my circuits got tangled. Try asking that again?";

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("API key not configured")]
    MissingApiKey,
    #[error("upstream API error: {status} - {message}")]
    Upstream { status: u16, message: String },
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned a malformed payload: {0}")]
    Malformed(String),
}

/// Body of a chat-completions call.
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
}

impl<'a> CompletionRequest<'a> {
    pub fn new(system_prompt: &str, user_message: &str) -> Self {
        Self {
            model: MODEL_ID,
            messages: vec![
                Message {
                    role: Role::System,
                    content: system_prompt.to_string(),
                },
                Message {
                    role: Role::User,
                    content: user_message.to_string(),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
        }
    }
}

// A thin client for an OpenAI-compatible completions endpoint
pub struct GatewayClient {
    url: String,
    api_key: Option<String>,
    client: Client,
}

impl GatewayClient {
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Self {
        let url = url.into();
        info!("Completions endpoint: {}", url);
        Self {
            url,
            api_key,
            client: Client::new(),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends one completion request and returns the raw assistant text.
    pub async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String, GatewayError> {
        let api_key = self.api_key.as_deref().ok_or(GatewayError::MissingApiKey)?;

        let payload = CompletionRequest::new(system_prompt, user_message);
        info!("Sending completion request (model: {}, max_tokens: {})", payload.model, payload.max_tokens);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(upstream_error(status, &body));
        }

        let body = response.text().await?;
        let response_json: Value =
            serde_json::from_str(&body).map_err(|e| GatewayError::Malformed(e.to_string()))?;
        debug!("Response JSON: {}", response_json);

        let content = response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .unwrap_or(EMPTY_COMPLETION_FALLBACK);

        info!("Completion length: {} characters", content.chars().count());
        Ok(content.to_string())
    }
}

fn upstream_error(status: StatusCode, body: &str) -> GatewayError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|error| error.get("message"))
                .and_then(|message| message.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "Unknown error".to_string());
    GatewayError::Upstream {
        status: status.as_u16(),
        message,
    }
}
