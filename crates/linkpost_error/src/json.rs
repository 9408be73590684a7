//! Rendering failures for JSON output.

/// A value could not be rendered as JSON, e.g. a publish outcome or an
/// analytics report printed by the CLI.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// Message from the serializer
    pub message: String,
    /// Line where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl JsonError {
    /// Record a serialization failure at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkpost_error::{JsonError, LinkpostError, LinkpostErrorKind};
    ///
    /// let err: LinkpostError = JsonError::new("Failed to render output: key must be a string").into();
    /// assert!(matches!(err.kind(), LinkpostErrorKind::Json(_)));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: caller.line(),
            file: caller.file(),
        }
    }
}
