//! Generative content provider for linkpost.
//!
//! Wraps the Google Gemini `generateContent` REST endpoint behind the
//! [`ContentGenerator`](linkpost_core::ContentGenerator) trait.
//!
//! # Example
//!
//! ```no_run
//! use linkpost_core::ContentGenerator;
//! use linkpost_models::{GeminiClient, GeminiConfigBuilder};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeminiConfigBuilder::default()
//!     .url("https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent")
//!     .api_key("secret")
//!     .build()?;
//! let client = GeminiClient::new(config)?;
//!
//! if let Some(text) = client.generate().await {
//!     println!("{}", text);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{
    Candidate, CandidateContent, DEFAULT_GENERATION_TIMEOUT, DEFAULT_PROMPT, GeminiClient,
    GeminiConfig, GeminiConfigBuilder, GeminiResult, GenerateContentRequest,
    GenerateContentResponse, RequestContent, TextPart,
};
