//! Top-level error wrapper types.

use crate::{
    ConfigError, GeminiError, JsonError, ServerError, SocialError, StorageError,
};

/// Every error condition a linkpost operation can surface.
///
/// # Examples
///
/// ```
/// use linkpost_error::{LinkpostError, ConfigError};
///
/// let err: LinkpostError = ConfigError::new("CHAR_LIMIT must be at least 4").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum LinkpostErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Post history storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Content generation error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Social platform error
    #[from(SocialError)]
    Social(SocialError),
    /// HTTP API server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Linkpost error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Linkpost Error: {}", _0)]
pub struct LinkpostError(Box<LinkpostErrorKind>);

impl LinkpostError {
    /// Create a new error from a kind.
    pub fn new(kind: LinkpostErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LinkpostErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to LinkpostErrorKind
impl<T> From<T> for LinkpostError
where
    T: Into<LinkpostErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for linkpost operations.
///
/// # Examples
///
/// ```
/// use linkpost_error::{LinkpostResult, StorageError, StorageErrorKind};
///
/// fn read_history() -> LinkpostResult<Vec<String>> {
///     Err(StorageError::new(StorageErrorKind::FileRead("permission denied".into())))?
/// }
/// ```
pub type LinkpostResult<T> = std::result::Result<T, LinkpostError>;
