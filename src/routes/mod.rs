// src/routes/mod.rs
pub mod chat;
pub mod pages;

use std::path::Path;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use pages::{chat_page, handle_login, login_page};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router(static_dir: impl AsRef<Path>) -> Router<SharedState> {
    Router::new()
        .route("/", get(login_page))
        .route("/login", post(handle_login))
        .route("/chat_page", get(chat_page))
        .route("/chat", post(chat_handler))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}
