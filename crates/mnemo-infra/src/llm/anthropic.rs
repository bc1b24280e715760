//! Anthropic Messages API adapter.
//!
//! Sends requests to `/v1/messages` with header-based authentication and a
//! fixed protocol-version header. The result text is the first content
//! block's `text` field.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use mnemo_core::adapter::CompletionAdapter;
use mnemo_types::dispatch::{ProviderError, ProviderId};

use super::error_message;

/// The Anthropic API version header value.
const API_VERSION: &str = "2023-06-01";

/// Model used when the caller does not override one.
const DEFAULT_MODEL: &str = "claude-3-5-haiku-20241022";

/// Anthropic completion adapter.
pub struct AnthropicAdapter {
    client: reqwest::Client,
    base_url: String,
}

// AnthropicAdapter intentionally does NOT derive Debug so that no request
// state can leak into logs. Credentials are passed per call and exposed
// only while building headers.

impl AnthropicAdapter {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: "https://api.anthropic.com".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

/// Request body for the Messages API.
#[derive(Debug, Clone, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Clone, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Non-streaming response from the Messages API.
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
}

impl CompletionAdapter for AnthropicAdapter {
    fn provider(&self) -> ProviderId {
        ProviderId::Anthropic
    }

    fn default_model(&self) -> &str {
        DEFAULT_MODEL
    }

    async fn invoke(
        &self,
        prompt: &str,
        model: &str,
        max_tokens: u32,
        credential: &SecretString,
    ) -> Result<String, ProviderError> {
        let body = MessagesRequest {
            model,
            max_tokens,
            messages: vec![WireMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(self.url())
            .header("x-api-key", credential.expose_secret())
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::new(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(provider = "anthropic", %status, "completion request failed");
            return Err(ProviderError::new(error_message(status, &error_body)));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::new(format!("failed to parse response: {e}")))?;

        let ContentBlock::Text { text } = parsed
            .content
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::new("empty response content"))?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn adapter(server: &MockServer) -> AnthropicAdapter {
        AnthropicAdapter::new(reqwest::Client::new()).with_base_url(server.uri())
    }

    #[test]
    fn test_request_serialization() {
        let body = MessagesRequest {
            model: "claude-3-5-haiku-20241022",
            max_tokens: 1024,
            messages: vec![WireMessage {
                role: "user",
                content: "Hello",
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "claude-3-5-haiku-20241022");
        assert_eq!(json["max_tokens"], 1024);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Hello");
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{"id":"msg_1","content":[{"type":"text","text":"Hi there"}]}"#;
        let parsed: MessagesResponse = serde_json::from_str(json).unwrap();
        let ContentBlock::Text { text } = &parsed.content[0];
        assert_eq!(text, "Hi there");
    }

    #[tokio::test]
    async fn test_invoke_returns_first_content_block_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "test-key"))
            .and(header("anthropic-version", API_VERSION))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "msg_1",
                "content": [{"type": "text", "text": "hello"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = adapter(&server)
            .invoke("hi", DEFAULT_MODEL, 1024, &SecretString::from("test-key"))
            .await
            .unwrap();
        assert_eq!(text, "hello");
    }

    #[tokio::test]
    async fn test_invoke_surfaces_envelope_message_on_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"type": "authentication_error", "message": "invalid x-api-key"}
            })))
            .mount(&server)
            .await;

        let err = adapter(&server)
            .invoke("hi", DEFAULT_MODEL, 1024, &SecretString::from("bad"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid x-api-key");
    }

    #[tokio::test]
    async fn test_invoke_falls_back_to_status_text_on_malformed_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(500).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = adapter(&server)
            .invoke("hi", DEFAULT_MODEL, 1024, &SecretString::from("k"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Internal Server Error");
    }
}
