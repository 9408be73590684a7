//! Google Gemini `generateContent` client.

mod client;
mod config;
mod dto;

pub use client::GeminiClient;
pub use config::{DEFAULT_GENERATION_TIMEOUT, DEFAULT_PROMPT, GeminiConfig, GeminiConfigBuilder};
pub use dto::{
    Candidate, CandidateContent, GenerateContentRequest, GenerateContentResponse, RequestContent,
    TextPart,
};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, linkpost_error::GeminiError>;
