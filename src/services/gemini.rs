//! Minimal Gemini `generateContent` client.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use super::chat_session::{ChatModel, Generation, Message, MessageRole};
use crate::{config::GeminiConfig, error::ModelError};

const API_KEY_HEADER: &str = "x-goog-api-key";

// Candidate finish reasons that mean the answer was withheld by policy.
const POLICY_FINISH_REASONS: &[&str] =
    &["SAFETY", "RECITATION", "BLOCKLIST", "PROHIBITED_CONTENT", "SPII"];

pub struct GeminiClient {
    http: Client,
    base: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self, ModelError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        let model = config.model.trim_start_matches("models/").to_string();

        Ok(Self {
            http,
            base: config.api_base.trim_end_matches('/').to_string(),
            model,
            api_key: config.api_key.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Look the model up with our key. Fails if the key is rejected or the
    /// model does not exist.
    pub async fn verify(&self) -> Result<(), ModelError> {
        let url = format!("{}/v1beta/models/{}", self.base, self.model);
        let resp = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        check_status(resp).await?;
        Ok(())
    }

    async fn generate_content(
        &self,
        body: &GenerateContentRequest<'_>,
    ) -> Result<GenerateContentResponse, ModelError> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base, self.model);
        let resp = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await?;
        let resp = check_status(resp).await?;

        let raw = resp.text().await?;
        serde_json::from_str(&raw).map_err(|e| {
            tracing::debug!(
                response_preview = %raw.chars().take(100).collect::<String>(),
                "Failed to parse Gemini response"
            );
            ModelError::Decode(e.to_string())
        })
    }
}

#[async_trait]
impl ChatModel for GeminiClient {
    async fn generate(&self, history: &[Message]) -> Result<Generation, ModelError> {
        let body = GenerateContentRequest::from_history(history);
        let response = self.generate_content(&body).await?;
        Ok(interpret(response))
    }
}

async fn check_status(resp: Response) -> Result<Response, ModelError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorEnvelope>(&body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.clone());

    let key_rejected = matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        || (status == StatusCode::BAD_REQUEST && body.contains("API_KEY_INVALID"));

    if key_rejected {
        Err(ModelError::InvalidCredential(message))
    } else {
        Err(ModelError::Api { status: status.as_u16(), message })
    }
}

/// Reduce a provider response to one outcome. A prompt-level block wins,
/// then any candidate text, then a policy finish reason.
fn interpret(response: GenerateContentResponse) -> Generation {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Generation::Blocked(reason);
    }

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Generation::Empty;
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();
    if !text.is_empty() {
        return Generation::Text(text);
    }

    match candidate.finish_reason {
        Some(reason) if POLICY_FINISH_REASONS.contains(&reason.as_str()) => {
            Generation::Blocked(reason)
        }
        _ => Generation::Empty,
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_history(history: &'a [Message]) -> Self {
        let contents = history
            .iter()
            .map(|m| Content {
                role: match m.role {
                    MessageRole::User => "user",
                    MessageRole::Model => "model",
                },
                parts: vec![Part { text: &m.content }],
            })
            .collect();
        Self { contents }
    }
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Debug)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Generation {
        interpret(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn joins_text_parts() {
        let generation = parse(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Preheat " }, { "text": "the oven." }] },
                "finishReason": "STOP"
            }]
        }));
        assert_eq!(generation, Generation::Text("Preheat the oven.".into()));
    }

    #[test]
    fn prompt_block_reason() {
        let generation = parse(json!({ "promptFeedback": { "blockReason": "SAFETY" } }));
        assert_eq!(generation, Generation::Blocked("SAFETY".into()));
    }

    #[test]
    fn candidate_policy_stop() {
        let generation = parse(json!({
            "candidates": [{ "finishReason": "PROHIBITED_CONTENT" }]
        }));
        assert_eq!(generation, Generation::Blocked("PROHIBITED_CONTENT".into()));
    }

    #[test]
    fn nothing_usable() {
        assert_eq!(parse(json!({})), Generation::Empty);
        assert_eq!(
            parse(json!({ "candidates": [{ "content": { "parts": [] }, "finishReason": "MAX_TOKENS" }] })),
            Generation::Empty
        );
    }

    #[test]
    fn request_body_shape() {
        let history = vec![
            Message::new(MessageRole::User, "hi"),
            Message::new(MessageRole::Model, "hello"),
            Message::new(MessageRole::User, "eggs?"),
        ];
        let body = serde_json::to_value(GenerateContentRequest::from_history(&history)).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": "hi" }] },
                    { "role": "model", "parts": [{ "text": "hello" }] },
                    { "role": "user", "parts": [{ "text": "eggs?" }] }
                ]
            })
        );
    }
}
