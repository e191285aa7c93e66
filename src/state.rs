// src/state.rs
use std::sync::Arc;

use crate::services::forwarder::Forwarder;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub forwarder: Forwarder,
}

impl AppState {
    pub fn new(forwarder: Forwarder) -> Self {
        Self { forwarder }
    }
}
