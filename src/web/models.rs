use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    /// The user text as posted, if present and not blank.
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "system")]
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_message_counts_as_missing() {
        let req: ChatRequest = serde_json::from_str(r#"{"message":"   "}"#).unwrap();
        assert_eq!(req.message(), None);
    }

    #[test]
    fn absent_message_field_parses() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.message(), None);
    }

    #[test]
    fn message_is_forwarded_as_posted() {
        let req: ChatRequest = serde_json::from_str(r#"{"message":"  hi  "}"#).unwrap();
        assert_eq!(req.message(), Some("  hi  "));
    }

    #[test]
    fn error_body_omits_missing_message() {
        let json = serde_json::to_value(ErrorBody::new("Method not allowed")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Method not allowed" }));
    }
}
