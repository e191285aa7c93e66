// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::ask_rag;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    let api_routes = Router::new().route("/chat/rag", post(ask_rag));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}
