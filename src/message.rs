// src/message.rs
use serde::{Deserialize, Deserializer, Serialize};

// Inbound leg: what clients send to /api/chat/rag and get back.

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub question: String,
}

// Absent and `null` questions are both relayed as "".
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatResponse {
    pub answer: String,
}

// Outbound leg: what the relay sends to the AI server and expects back.

#[derive(Debug, Serialize)]
pub struct UpstreamChatRequest<'a> {
    pub question: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamChatResponse {
    pub answer: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
