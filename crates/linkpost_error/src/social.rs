//! Social platform error types.

/// Social platform error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SocialErrorKind {
    /// Failed to create the HTTP client
    #[display("Failed to create social client: {}", _0)]
    ClientCreation(String),
    /// Transport failure (connect, timeout, body read)
    #[display("{}", _0)]
    Http(String),
    /// Unexpected status; the message is the raw response body
    #[display("{}", message)]
    Api {
        /// HTTP status code
        status_code: u16,
        /// Raw response body
        message: String,
    },
    /// Publish succeeded but the response named no post
    #[display("missing post identifier in response")]
    MissingIdentifier,
    /// Refused to publish an empty post
    #[display("content is empty")]
    EmptyContent,
}

impl SocialErrorKind {
    /// Text reported to API callers as failure details.
    ///
    /// For upstream rejections this is the raw response body.
    pub fn details(&self) -> String {
        self.to_string()
    }
}

/// Social platform error with source location tracking.
///
/// # Examples
///
/// ```
/// use linkpost_error::{SocialError, SocialErrorKind};
///
/// let err = SocialError::new(SocialErrorKind::Api {
///     status_code: 401,
///     message: "{\"message\":\"Invalid access token\"}".to_string(),
/// });
/// assert_eq!(err.kind.details(), "{\"message\":\"Invalid access token\"}");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Social Error: {} at line {} in {}", kind, line, file)]
pub struct SocialError {
    /// The kind of error that occurred
    pub kind: SocialErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SocialError {
    /// Create a new SocialError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SocialErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
