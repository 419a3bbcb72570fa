// src/state.rs
use std::sync::Arc;

use crate::services::chat_session::{ChatModel, ChatSession};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub chat: ChatSession,
}

impl AppState {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self {
            chat: ChatSession::new(model),
        }
    }
}
