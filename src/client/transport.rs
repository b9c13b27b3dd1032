use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::web::models::{ChatRequest, ChatResponse};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("chat server answered {0}")]
    Status(u16),
}

/// Delivers a user message to the chat proxy and returns its reply.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, message: &str) -> Result<String, TransportError>;
}

pub struct HttpTransport {
    endpoint: String,
    client: Client,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(&self, message: &str) -> Result<String, TransportError> {
        debug!("Posting chat message to {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest {
                message: Some(message.to_string()),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TransportError::Status(response.status().as_u16()));
        }

        let body: ChatResponse = response.json().await?;
        Ok(body.response)
    }
}
