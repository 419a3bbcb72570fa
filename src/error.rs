// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Startup configuration failures. Any of these stops the process before it binds.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("GOOGLE_API_KEY is not set; add it to the environment or a .env file")]
    MissingApiKey,
}

/// Failures talking to the model provider.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("provider rejected the API key: {0}")]
    InvalidCredential(String),

    #[error("malformed provider response: {0}")]
    Decode(String),
}

/// Errors surfaced to HTTP clients.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
