// ABOUTME: ChatClient trait and its reqwest implementation for the remote chat endpoint.
// ABOUTME: Exactly one POST per call, no retries; HTTP status does not decide success.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, warn};

use crate::api::error::ChatError;
use crate::api::types::{ChatReply, ChatRequest};

/// Anything that can answer a chat question.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn ask(&self, request: &ChatRequest) -> Result<ChatReply, ChatError>;
}

/// HTTP client that POSTs `{question, lang}` as JSON to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpChatClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpChatClient {
    /// Build a client for `endpoint`. Without a timeout the platform default applies.
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ChatClient for HttpChatClient {
    async fn ask(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        debug!(endpoint = %self.endpoint, lang = %request.lang, "sending chat request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        // A non-2xx reply with a well-formed body is still shown to the user.
        if !status.is_success() {
            warn!(%status, "chat endpoint returned a non-success status");
        }

        parse_reply(&body)
    }
}

/// Validate a raw response body against the `{response: string}` schema.
pub fn parse_reply(body: &[u8]) -> Result<ChatReply, ChatError> {
    let value: serde_json::Value = serde_json::from_slice(body).map_err(ChatError::InvalidJson)?;
    serde_json::from_value(value).map_err(|e| ChatError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reply_accepts_response_field() {
        let reply = parse_reply(r#"{"response": "C'est un régime."}"#.as_bytes()).unwrap();
        assert_eq!(reply.response, "C'est un régime.");
    }

    #[test]
    fn parse_reply_rejects_non_json() {
        let err = parse_reply(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ChatError::InvalidJson(_)));
        assert_eq!(err.kind(), "invalid_json");
    }

    #[test]
    fn parse_reply_rejects_missing_field() {
        let err = parse_reply(br#"{"answer": "hi"}"#).unwrap_err();
        assert!(matches!(err, ChatError::MalformedResponse(_)));
        assert!(err.to_string().contains("response"));
    }

    #[test]
    fn parse_reply_rejects_non_string_field() {
        let err = parse_reply(br#"{"response": null}"#).unwrap_err();
        assert!(matches!(err, ChatError::MalformedResponse(_)));

        let err = parse_reply(br#"[1, 2, 3]"#).unwrap_err();
        assert!(matches!(err, ChatError::MalformedResponse(_)));
    }

    #[test]
    fn new_client_keeps_endpoint() {
        let url = Url::parse("http://localhost:8000/api/chat").unwrap();
        let client = HttpChatClient::new(url.clone(), Some(Duration::from_secs(5))).unwrap();
        assert_eq!(client.endpoint(), &url);
    }
}
