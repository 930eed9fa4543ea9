//! In-memory chat transcript.  Nothing here touches the disk; the transcript
//! lives exactly as long as the [`ChatSession`](crate::ChatSession) owning it.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

/// Bounded transcript; the oldest turns are dropped once `max_turns` is
/// exceeded.  `max_turns == 0` keeps everything.  Trimming never leaves an
/// assistant reply at the head without the user message it answered.
#[derive(Debug, Clone, Default)]
pub struct ChatHistory {
    turns: VecDeque<ChatTurn>,
    max_turns: usize,
}

impl ChatHistory {
    pub fn new(max_turns: usize) -> Self {
        Self {
            turns: VecDeque::new(),
            max_turns,
        }
    }

    pub fn push(&mut self, sender: Sender, text: impl Into<String>) {
        self.turns.push_back(ChatTurn {
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        });
        if self.max_turns == 0 || self.turns.len() <= self.max_turns {
            return;
        }
        while self.turns.len() > self.max_turns {
            self.turns.pop_front();
        }
        while self
            .turns
            .front()
            .is_some_and(|turn| turn.sender == Sender::Ai)
        {
            self.turns.pop_front();
        }
    }

    pub fn turns(&self) -> impl Iterator<Item = &ChatTurn> {
        self.turns.iter()
    }

    /// Up to `n` most-recent turns, oldest first.
    pub fn recent(&self, n: usize) -> Vec<&ChatTurn> {
        let skip = self.turns.len().saturating_sub(n);
        self.turns.iter().skip(skip).collect()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_appends_in_order() {
        let mut history = ChatHistory::new(0);
        history.push(Sender::User, "hello");
        history.push(Sender::Ai, "hi there");
        let turns: Vec<&ChatTurn> = history.turns().collect();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].sender, Sender::User);
        assert_eq!(turns[1].text, "hi there");
    }

    #[test]
    fn bounded_history_drops_oldest() {
        let mut history = ChatHistory::new(3);
        for i in 0..5 {
            history.push(Sender::User, format!("msg {i}"));
        }
        assert_eq!(history.len(), 3);
        let texts: Vec<&str> = history.turns().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["msg 2", "msg 3", "msg 4"]);
    }

    #[test]
    fn trimming_drops_whole_exchanges() {
        let mut history = ChatHistory::new(3);
        for i in 0..3 {
            history.push(Sender::User, format!("q{i}"));
            history.push(Sender::Ai, format!("a{i}"));
        }
        let texts: Vec<&str> = history.turns().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["q2", "a2"]);

        history.push(Sender::User, "q3");
        let senders: Vec<Sender> = history.turns().map(|t| t.sender).collect();
        assert_eq!(senders, vec![Sender::User, Sender::Ai, Sender::User]);
    }

    #[test]
    fn untrimmed_history_may_start_with_a_reply() {
        let mut history = ChatHistory::new(3);
        history.push(Sender::Ai, "welcome");
        history.push(Sender::User, "hi");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn zero_limit_is_unbounded() {
        let mut history = ChatHistory::new(0);
        for i in 0..500 {
            history.push(Sender::Ai, format!("{i}"));
        }
        assert_eq!(history.len(), 500);
    }

    #[test]
    fn recent_returns_tail() {
        let mut history = ChatHistory::new(0);
        for i in 0..4 {
            history.push(Sender::User, format!("{i}"));
        }
        let tail: Vec<&str> = history.recent(2).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(tail, vec!["2", "3"]);
        assert_eq!(history.recent(10).len(), 4);
    }

    #[test]
    fn clear_empties() {
        let mut history = ChatHistory::new(10);
        history.push(Sender::User, "x");
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn sender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sender::Ai).unwrap(), "\"ai\"");
    }
}
