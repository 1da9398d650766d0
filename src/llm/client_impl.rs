use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::client::CompletionClient;

/// Model identifier sent on every call. gpt-5-mini requires the Responses API.
pub const MODEL: &str = "gpt-5-mini";

/// Placeholder returned when the provider reply carries no text at all.
pub const EMPTY_COMPLETION_PLACEHOLDER: &str = "（無內容返回）";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for the OpenAI Responses API.
pub struct OpenAiResponsesClient {
    model: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: &'a str,
    max_output_tokens: u32,
}

/// Shape-tolerant view of a Responses API reply. Every level defaults so a
/// reply that omits a field still deserializes.
#[derive(Debug, Default, Deserialize)]
struct ResponsesReply {
    #[serde(default)]
    output_text: Option<String>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Default, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Debug, Default, Deserialize)]
struct ContentPart {
    #[serde(default)]
    text: Option<String>,
}

impl ResponsesReply {
    /// Primary extraction is the top-level `output_text` field. When it is
    /// absent or empty, concatenate any text fragments found in the nested
    /// output items instead.
    fn extract_text(&self) -> Option<String> {
        if let Some(text) = &self.output_text {
            if !text.is_empty() {
                return Some(text.clone());
            }
        }

        let collected: String = self
            .output
            .iter()
            .flat_map(|item| item.content.iter())
            .filter_map(|part| part.text.as_deref())
            .collect();

        if collected.is_empty() {
            None
        } else {
            Some(collected)
        }
    }
}

impl OpenAiResponsesClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Result<Self> {
        Ok(Self {
            model: MODEL.to_string(),
            base_url,
            // No explicit timeout: the handler waits until the provider
            // responds or the connection fails.
            client: Client::builder()
                .build()
                .context("failed to build HTTP client")?,
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiResponsesClient {
    async fn complete(
        &self,
        api_key: &str,
        prompt: &str,
        max_output_tokens: u32,
    ) -> Result<String> {
        let request = ResponsesRequest {
            model: &self.model,
            input: prompt,
            max_output_tokens,
        };

        debug!("Calling OpenAI Responses API with model: {}", self.model);

        let url = format!("{}/responses", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("authorization", format!("Bearer {}", api_key))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to OpenAI API")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            bail!("OpenAI API error {}: {}", status, error_text);
        }

        let reply: ResponsesReply = response
            .json()
            .await
            .context("Failed to parse OpenAI API response")?;

        Ok(reply
            .extract_text()
            .unwrap_or_else(|| EMPTY_COMPLETION_PLACEHOLDER.to_string()))
    }
}
