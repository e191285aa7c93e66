use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

/// `POST /api/chat/rag`: relays the question and wraps the upstream answer.
pub async fn ask_rag(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let answer = state.forwarder.get_ai_response(&payload.question).await?;

    Ok(Json(ChatResponse { answer }))
}
