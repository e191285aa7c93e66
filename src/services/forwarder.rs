// src/services/forwarder.rs
//! Outbound leg of the relay: one POST to the AI server per question.

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::UpstreamConfig;
use crate::message::{UpstreamChatRequest, UpstreamChatResponse};

const RAG_PATH: &str = "/chat/rag";

#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("AI server unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("AI server responded with {0}")]
    BadStatus(StatusCode),

    #[error("AI server returned a malformed body: {0}")]
    MalformedBody(#[source] serde_json::Error),
}

/// Sends questions to the AI server and hands back its `answer`.
#[derive(Debug)]
pub struct Forwarder {
    client: Client,
    endpoint: String,
}

impl Forwarder {
    pub fn new(client: Client, config: &UpstreamConfig) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", config.base_url(), RAG_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Forwards `question` verbatim and returns the upstream `answer` verbatim.
    ///
    /// Exactly one request is made. A non-2xx status, or a body without a
    /// string `answer`, is an error.
    pub async fn get_ai_response(&self, question: &str) -> Result<String, ForwardError> {
        debug!(url = %self.endpoint, question_len = question.len(), "forwarding question");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&UpstreamChatRequest { question })
            .send()
            .await
            .map_err(ForwardError::Unreachable)?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.endpoint, %status, "AI server returned an error status");
            return Err(ForwardError::BadStatus(status));
        }

        // A connection lost mid-body is a transport failure, not a decode one.
        let bytes = response.bytes().await.map_err(ForwardError::Unreachable)?;
        let body: UpstreamChatResponse =
            serde_json::from_slice(&bytes).map_err(ForwardError::MalformedBody)?;

        debug!(answer_len = body.answer.len(), "received answer");
        Ok(body.answer)
    }
}
