// src/services/chat_session.rs
use std::{fmt::Debug, sync::Arc, time::Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::ModelError;

pub const NO_VALID_RESPONSE: &str = "I'm sorry, I couldn't get a valid response. Please try again.";
pub const CONNECTION_ERROR: &str =
    "An error occurred while trying to connect to the assistant. Please check your connection.";

const PROMPT_PREVIEW_CHARS: usize = 80;

#[derive(Clone, Debug)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: Instant,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self { role, content: content.into(), timestamp: Instant::now() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Model,
}

/// What the provider produced for one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Generation {
    Text(String),
    /// Withheld by content policy; carries the provider's reason code.
    Blocked(String),
    Empty,
}

impl Generation {
    /// Text shown to the user for this outcome.
    pub fn into_reply(self) -> String {
        match self {
            Generation::Text(text) => text,
            Generation::Blocked(reason) => format!("Response blocked due to: {}", reason),
            Generation::Empty => NO_VALID_RESPONSE.to_string(),
        }
    }
}

/// A provider that continues a conversation. `history` ends with the new user turn.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn generate(&self, history: &[Message]) -> Result<Generation, ModelError>;
}

/// The one conversation the process holds with the model.
///
/// Every request extends the same history. The lock is held for the whole
/// provider round trip, so concurrent sends are serialized and the history
/// records turns in the order they completed.
#[derive(Clone)]
pub struct ChatSession {
    model: Arc<dyn ChatModel>,
    history: Arc<Mutex<Vec<Message>>>,
}

impl Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession").finish_non_exhaustive()
    }
}

impl ChatSession {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self {
            model,
            history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Send a prompt and return the raw outcome. History only grows when the
    /// model answers with text; a send that fails or is dropped mid-call
    /// leaves it untouched.
    pub async fn try_send(&self, prompt: &str) -> Result<Generation, ModelError> {
        let preview: String = prompt.chars().take(PROMPT_PREVIEW_CHARS).collect();
        tracing::info!("Sending prompt to Gemini: '{}...'", preview.trim());

        let mut guard = self.history.lock().await;
        let user = Message::new(MessageRole::User, prompt);

        let mut turn = guard.clone();
        turn.push(user.clone());

        let outcome = self.model.generate(&turn).await;
        if let Ok(Generation::Text(text)) = &outcome {
            guard.push(user);
            guard.push(Message::new(MessageRole::Model, text.clone()));
        }
        outcome
    }

    /// Send a prompt and always come back with something to show the user.
    pub async fn send(&self, prompt: &str) -> String {
        match self.try_send(prompt).await {
            Ok(generation) => {
                if let Generation::Blocked(reason) = &generation {
                    tracing::warn!(reason = %reason, "Gemini blocked the response");
                }
                generation.into_reply()
            }
            Err(e) => {
                tracing::error!(error = %e, "An error occurred while calling the Gemini API");
                CONNECTION_ERROR.to_string()
            }
        }
    }

    /// Copy of the conversation so far.
    pub async fn history(&self) -> Vec<Message> {
        self.history.lock().await.clone()
    }

    /// Number of recorded messages (user and model).
    pub async fn turns(&self) -> usize {
        self.history.lock().await.len()
    }
}
