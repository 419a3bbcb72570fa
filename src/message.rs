// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::services::prompt_builder::RequestKind;

#[derive(Deserialize, Default)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    // Any JSON value is accepted; non-strings fall back to general chat.
    #[serde(default, rename = "type")]
    pub kind: Option<Value>,
}

impl ChatRequest {
    pub fn request_kind(&self) -> RequestKind {
        RequestKind::from(self.kind.as_ref().and_then(Value::as_str))
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}
