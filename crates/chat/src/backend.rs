use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mindspace_config::ChatConfig;
use mindspace_mood::MoodLabel;

/// Payload posted to the chat backend for every user message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub user_id: String,
    pub mood: MoodLabel,
    pub session_id: String,
    pub timestamp: DateTime<Utc>,
}

/// Anything that can turn a user message into an assistant reply.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send_message(&self, request: &ChatRequest) -> Result<String>;
}

/// JSON-over-HTTP backend: `POST` the request to `api_url` and read the reply
/// from the `response` (or `message`) field of the response body.
#[derive(Debug, Clone)]
pub struct HttpChatBackend {
    client: reqwest::Client,
    api_url: String,
    fallback_reply: String,
}

impl HttpChatBackend {
    pub fn new(config: &ChatConfig) -> Result<Self> {
        if config.request_timeout_secs == 0 {
            bail!("chat.request_timeout_secs must be at least 1");
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("build chat http client")?;
        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            fallback_reply: config.fallback_reply.clone(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn send_message(&self, request: &ChatRequest) -> Result<String> {
        let response = self
            .client
            .post(&self.api_url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("POST {}", self.api_url))?;

        let status = response.status();
        if !status.is_success() {
            bail!("chat backend returned HTTP {status}");
        }

        let body: serde_json::Value = response
            .json()
            .await
            .context("decode chat backend response")?;
        Ok(extract_reply(&body).unwrap_or_else(|| self.fallback_reply.clone()))
    }
}

/// Pick the reply text out of a backend response body: `response` first,
/// then `message`.  Empty strings count as missing.
pub fn extract_reply(body: &serde_json::Value) -> Option<String> {
    ["response", "message"].iter().find_map(|key| {
        body.get(key)
            .and_then(|value| value.as_str())
            .filter(|text| !text.is_empty())
            .map(ToString::to_string)
    })
}
