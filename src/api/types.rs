// ABOUTME: Request and response bodies exchanged with the chat endpoint.
// ABOUTME: Request is {question, lang}; the reply must carry a string `response` field.

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Body POSTed to the chat endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
    pub lang: Language,
}

/// Body expected back from the chat endpoint. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}
