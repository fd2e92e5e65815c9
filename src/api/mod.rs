// ABOUTME: Chat endpoint API — wire types, the ChatClient seam, and the reqwest HTTP client.
// ABOUTME: One JSON POST per question; the reply schema is validated strictly.

pub mod client;
pub mod error;
pub mod types;

pub use client::{ChatClient, HttpChatClient, parse_reply};
pub use error::ChatError;
pub use types::{ChatReply, ChatRequest};
