//! OpenAI chat completions adapter.
//!
//! Sends requests to `/v1/chat/completions` with bearer-token
//! authorization. The result text is the first choice's message content.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use mnemo_core::adapter::CompletionAdapter;
use mnemo_types::dispatch::{ProviderError, ProviderId};

use super::error_message;

/// Model used when the caller does not override one.
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// OpenAI completion adapter.
pub struct OpenAiAdapter {
    client: reqwest::Client,
    base_url: String,
}

// OpenAiAdapter intentionally does NOT derive Debug; see AnthropicAdapter.

impl OpenAiAdapter {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: "https://api.openai.com".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

/// Request body for the chat completions API.
#[derive(Debug, Clone, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Clone, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Non-streaming response from the chat completions API.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl CompletionAdapter for OpenAiAdapter {
    fn provider(&self) -> ProviderId {
        ProviderId::OpenAi
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
        let body = ChatRequest {
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
            .bearer_auth(credential.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::new(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(provider = "openai", %status, "completion request failed");
            return Err(ProviderError::new(error_message(status, &error_body)));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::new(format!("failed to parse response: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::new("empty response content"))
    }
}
