//! Wire types for the `generateContent` endpoint.

use serde::{Deserialize, Serialize};

/// Request body: `{"contents":[{"parts":[{"text": ...}]}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    /// Conversation turns; linkpost always sends exactly one
    pub contents: Vec<RequestContent>,
}

impl GenerateContentRequest {
    /// Single-turn request carrying one text prompt.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![TextPart {
                    text: Some(prompt.into()),
                }],
            }],
        }
    }
}

/// One turn of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContent {
    /// Parts of the turn
    pub parts: Vec<TextPart>,
}

/// A text part, used in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPart {
    /// Text of the part; non-text parts leave it empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Response body: `{"candidates":[{"content":{"parts":[{"text": ...}]}}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    /// Generated candidates, best first
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    ///
    /// Blank text counts as no text.
    pub fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .filter(|text| !text.trim().is_empty())
    }
}

/// One generated candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Candidate content; absent when the candidate was blocked
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

/// Content of a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateContent {
    /// Parts of the generated turn
    #[serde(default)]
    pub parts: Vec<TextPart>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let request = GenerateContentRequest::from_prompt("tip");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"contents": [{"parts": [{"text": "tip"}]}]})
        );
    }

    #[test]
    fn test_first_text_takes_first_candidate_part() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second"}], "role": "model"}},
                {"content": {"parts": [{"text": "other"}]}}
            ],
            "usageMetadata": {"totalTokenCount": 12}
        }))
        .unwrap();
        assert_eq!(response.first_text().as_deref(), Some("first"));
    }

    #[test]
    fn test_first_text_blank_is_none() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": " \n "}]}}]
        }))
        .unwrap();
        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn test_first_text_missing_paths() {
        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.first_text(), None);

        let blocked: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY"}]})).unwrap();
        assert_eq!(blocked.first_text(), None);

        let no_parts: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"content": {"parts": []}}]})).unwrap();
        assert_eq!(no_parts.first_text(), None);
    }
}
