pub mod backend;
pub mod history;
pub mod session;

pub use backend::{ChatBackend, ChatRequest, HttpChatBackend, extract_reply};
pub use history::{ChatHistory, ChatTurn, Sender};
pub use session::{ChatReply, ChatSession, SUGGESTIONS};
