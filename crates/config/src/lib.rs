use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Identity used when no user name is configured.
pub const ANONYMOUS_USER: &str = "anonymous";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProfileConfig {
    /// Display name sent as `userId` with every chat request.  Empty means
    /// the request goes out as [`ANONYMOUS_USER`].
    pub user_name: String,
}

/// Chat backend transport settings exposed in the `[chat]` config section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Endpoint that receives `POST` requests with the chat payload.
    /// Overridden at runtime by the `MINDSPACE_API_URL` environment variable.
    pub api_url: String,
    pub request_timeout_secs: u64,
    /// Reply used when the backend answers 2xx but the body carries neither
    /// a `response` nor a `message` field.
    pub fallback_reply: String,
    /// Reply shown to the user when the backend cannot be reached or
    /// answers with a non-success status.
    pub connection_error_reply: String,
    /// Maximum number of turns kept in the in-memory transcript.
    /// `0` means unlimited.
    pub max_history_turns: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000/api/chat".to_string(),
            request_timeout_secs: 30,
            fallback_reply: "I apologize, but I couldn't process your message right now."
                .to_string(),
            connection_error_reply:
                "Sorry, I'm having trouble connecting right now. Please try again.".to_string(),
            max_history_turns: 200,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub profile: ProfileConfig,
    pub chat: ChatConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let mut config = Self::default();
        if let Ok(raw) = fs::read_to_string(path) {
            config = toml::from_str(&raw)?;
        }

        if let Ok(value) = env::var("MINDSPACE_API_URL") {
            if !value.is_empty() {
                config.chat.api_url = value;
            }
        }

        if let Ok(value) = env::var("MINDSPACE_USER") {
            if !value.is_empty() {
                config.profile.user_name = value;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject values the chat client cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.chat.request_timeout_secs == 0 {
            bail!("chat.request_timeout_secs must be at least 1");
        }
        Ok(())
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        let rendered = toml::to_string_pretty(self)?;
        fs::write(path, rendered)?;
        Ok(())
    }

    /// The `userId` attached to outgoing chat requests.
    pub fn effective_user_id(&self) -> &str {
        let name = self.profile.user_name.trim();
        if name.is_empty() { ANONYMOUS_USER } else { name }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
