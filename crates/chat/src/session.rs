use anyhow::Result;
use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

use mindspace_config::AppConfig;
use mindspace_mood::{MoodLabel, MoodState};

use crate::{ChatBackend, ChatHistory, ChatRequest, Sender};

/// Canned openers offered before the first message.
pub const SUGGESTIONS: [&str; 4] = [
    "I'm feeling anxious today",
    "I need coping strategies",
    "I feel overwhelmed",
    "I need someone to talk to",
];

/// Outcome of one user message.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub text: String,
    /// Mood after reading the user's message.
    pub mood: MoodLabel,
    pub mood_changed: bool,
    /// `false` when the backend failed and `text` is the connection error notice.
    pub delivered: bool,
}

/// One conversation: the backend it talks to, the user's mood, and the
/// transcript of delivered exchanges.
pub struct ChatSession<B> {
    backend: B,
    mood: MoodState,
    history: ChatHistory,
    user_id: String,
    session_id: String,
    connection_error_reply: String,
}

impl<B: ChatBackend> ChatSession<B> {
    pub fn new(backend: B, config: &AppConfig) -> Self {
        Self {
            backend,
            mood: MoodState::new(),
            history: ChatHistory::new(config.chat.max_history_turns),
            user_id: config.effective_user_id().to_string(),
            session_id: new_session_id(),
            connection_error_reply: config.chat.connection_error_reply.clone(),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn mood(&self) -> MoodLabel {
        self.mood.current()
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    /// Handle one user message.
    ///
    /// Blank input is ignored (`Ok(None)`).  The mood is updated from the
    /// message before it is sent.  A backend failure is not an error here:
    /// the user gets the configured connection notice and the exchange is
    /// left out of the transcript.
    pub async fn send(&mut self, text: &str) -> Result<Option<ChatReply>> {
        let message = text.trim();
        if message.is_empty() {
            return Ok(None);
        }

        let mood_changed = self.mood.observe(message).is_some();
        let request = ChatRequest {
            message: message.to_string(),
            user_id: self.user_id.clone(),
            mood: self.mood.current(),
            session_id: self.session_id.clone(),
            timestamp: Utc::now(),
        };

        match self.backend.send_message(&request).await {
            Ok(reply) => {
                debug!(session = %self.session_id, mood = %request.mood, "reply received");
                self.history.push(Sender::User, message);
                self.history.push(Sender::Ai, reply.clone());
                Ok(Some(ChatReply {
                    text: reply,
                    mood: request.mood,
                    mood_changed,
                    delivered: true,
                }))
            }
            Err(err) => {
                warn!(session = %self.session_id, "chat backend failed: {err:#}");
                Ok(Some(ChatReply {
                    text: self.connection_error_reply.clone(),
                    mood: request.mood,
                    mood_changed,
                    delivered: false,
                }))
            }
        }
    }

    /// Empty the transcript.  The mood indicator is left as it is.
    pub fn clear(&mut self) {
        self.history.clear();
    }
}

fn new_session_id() -> String {
    format!("session_{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use anyhow::anyhow;
    use async_trait::async_trait;

    use super::*;

    /// Records every request and answers with a canned reply, or fails.
    #[derive(Clone, Default)]
    struct FakeBackend {
        requests: Arc<Mutex<Vec<ChatRequest>>>,
        fail: bool,
    }

    #[async_trait]
    impl ChatBackend for FakeBackend {
        async fn send_message(&self, request: &ChatRequest) -> Result<String> {
            self.requests.lock().unwrap().push(request.clone());
            if self.fail {
                Err(anyhow!("connection refused"))
            } else {
                Ok(format!("echo: {}", request.message))
            }
        }
    }

    fn session(fail: bool) -> (ChatSession<FakeBackend>, Arc<Mutex<Vec<ChatRequest>>>) {
        let backend = FakeBackend {
            fail,
            ..FakeBackend::default()
        };
        let requests = backend.requests.clone();
        (ChatSession::new(backend, &AppConfig::default()), requests)
    }

    #[tokio::test]
    async fn blank_input_is_ignored() {
        let (mut chat, requests) = session(false);
        assert!(chat.send("   \n").await.unwrap().is_none());
        assert!(requests.lock().unwrap().is_empty());
        assert!(chat.history().is_empty());
    }

    #[tokio::test]
    async fn reply_is_recorded_with_mood() {
        let (mut chat, requests) = session(false);
        let reply = chat.send("  I feel so lonely  ").await.unwrap().unwrap();
        assert_eq!(reply.text, "echo: I feel so lonely");
        assert_eq!(reply.mood, MoodLabel::Sad);
        assert!(reply.mood_changed);
        assert!(reply.delivered);

        let sent = requests.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].message, "I feel so lonely");
        assert_eq!(sent[0].mood, MoodLabel::Sad);
        assert_eq!(sent[0].user_id, "anonymous");
        assert_eq!(sent[0].session_id, chat.session_id());

        let turns: Vec<_> = chat.history().turns().collect();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].sender, Sender::User);
        assert_eq!(turns[1].sender, Sender::Ai);
    }

    #[tokio::test]
    async fn unchanged_mood_is_reported() {
        let (mut chat, _) = session(false);
        chat.send("hello").await.unwrap();
        let reply = chat.send("how are you").await.unwrap().unwrap();
        assert_eq!(reply.mood, MoodLabel::Neutral);
        assert!(!reply.mood_changed);
    }

    #[tokio::test]
    async fn backend_failure_returns_notice_without_history() {
        let (mut chat, _) = session(true);
        let reply = chat.send("I'm furious").await.unwrap().unwrap();
        assert!(!reply.delivered);
        assert_eq!(reply.text, AppConfig::default().chat.connection_error_reply);
        // The mood still follows the message.
        assert_eq!(chat.mood(), MoodLabel::Angry);
        assert!(chat.history().is_empty());
    }

    #[tokio::test]
    async fn session_id_is_stable_across_messages() {
        let (mut chat, requests) = session(false);
        chat.send("one").await.unwrap();
        chat.send("two").await.unwrap();
        let sent = requests.lock().unwrap();
        assert_eq!(sent[0].session_id, sent[1].session_id);
        assert!(sent[0].session_id.starts_with("session_"));
    }

    #[tokio::test]
    async fn clear_keeps_mood() {
        let (mut chat, _) = session(false);
        chat.send("so calm and relaxed").await.unwrap();
        chat.clear();
        assert!(chat.history().is_empty());
        assert_eq!(chat.mood(), MoodLabel::Calm);
    }

    #[tokio::test]
    async fn configured_user_name_is_sent() {
        let mut config = AppConfig::default();
        config.profile.user_name = "Riley".to_string();
        let backend = FakeBackend::default();
        let requests = backend.requests.clone();
        let mut chat = ChatSession::new(backend, &config);
        chat.send("hi").await.unwrap();
        assert_eq!(requests.lock().unwrap()[0].user_id, "Riley");
    }

    #[test]
    fn suggestions_are_the_four_openers() {
        assert_eq!(SUGGESTIONS.len(), 4);
        assert!(SUGGESTIONS.contains(&"I feel overwhelmed"));
    }
}
