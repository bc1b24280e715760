//! Google generateContent adapter.
//!
//! Sends requests to `/v1beta/models/{model}:generateContent` with the API
//! key passed as a URL query parameter — no auth header. The result text
//! is the first candidate's first content part.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use mnemo_core::adapter::CompletionAdapter;
use mnemo_types::dispatch::{ProviderError, ProviderId};

use super::error_message;

/// Model used when the caller does not override one.
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Google Gemini completion adapter.
pub struct GoogleAdapter {
    client: reqwest::Client,
    base_url: String,
}

// GoogleAdapter intentionally does NOT derive Debug; see AnthropicAdapter.

impl GoogleAdapter {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }
}

/// Request body for the generateContent API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Clone, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

/// Response from the generateContent API.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

impl CompletionAdapter for GoogleAdapter {
    fn provider(&self) -> ProviderId {
        ProviderId::Google
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
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: max_tokens,
            },
        };

        let response = self
            .client
            .post(self.url(model))
            .query(&[("key", credential.expose_secret())])
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::new(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(provider = "google", %status, "completion request failed");
            return Err(ProviderError::new(error_message(status, &error_body)));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::new(format!("failed to parse response: {e}")))?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| ProviderError::new("empty response content"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn adapter(server: &MockServer) -> GoogleAdapter {
        GoogleAdapter::new(reqwest::Client::new()).with_base_url(server.uri())
    }

    #[test]
    fn test_request_serialization_uses_camel_case() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: "Hello" }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: 1024,
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Hello");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 1024);
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "candidates": [{"content": {"parts": [{"text": "Hi"}], "role": "model"}}]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.candidates[0].content.parts[0].text, "Hi");
    }

    #[tokio::test]
    async fn test_invoke_passes_key_in_query_and_returns_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!(
                "/v1beta/models/{DEFAULT_MODEL}:generateContent"
            )))
            .and(query_param("key", "g-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "hello"}]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = adapter(&server)
            .invoke("hi", DEFAULT_MODEL, 1024, &SecretString::from("g-key"))
            .await
            .unwrap();
        assert_eq!(text, "hello");
    }

    #[tokio::test]
    async fn test_invoke_surfaces_envelope_message_on_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}
            })))
            .mount(&server)
            .await;

        let err = adapter(&server)
            .invoke("hi", DEFAULT_MODEL, 1024, &SecretString::from("bad"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "API key not valid");
    }

    #[tokio::test]
    async fn test_invoke_rejects_empty_candidates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let err = adapter(&server)
            .invoke("hi", DEFAULT_MODEL, 1024, &SecretString::from("g-key"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "empty response content");
    }
}
