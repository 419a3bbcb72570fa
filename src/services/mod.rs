pub mod chat_session;
pub mod gemini;
pub mod prompt_builder;
