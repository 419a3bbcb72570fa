use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::prompt_builder,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    // Every body rejection is a 400, including a missing JSON content type
    // (axum's own status for that would be 415).
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected /chat body");
        AppError::BadRequest(rejection.body_text())
    })?;

    let kind = payload.request_kind();

    // Only a missing or empty message is refused; whitespace goes through untouched.
    let message = match payload.message.as_deref() {
        Some(m) if !m.is_empty() => m,
        _ => return Err(AppError::BadRequest("No message provided".to_string())),
    };

    tracing::info!(kind = kind.as_str(), len = message.len(), "Chat request");

    let prompt = prompt_builder::build(kind, message);
    let reply = state.chat.send(&prompt).await;

    Ok(Json(ChatResponse { reply }))
}
