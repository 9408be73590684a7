//! Invalid or missing settings.

/// A setting that is missing or out of range, named by its environment key.
///
/// Raised while loading `linkpost.toml` and the environment, and by
/// `ContentLimits::new` for a `CHAR_LIMIT` too small to hold the ellipsis.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What is wrong, including the offending key
    pub message: String,
    /// Line where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl ConfigError {
    /// Record a configuration problem at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkpost_error::ConfigError;
    ///
    /// let err = ConfigError::new("POST_INTERVAL_SECS must be greater than 0");
    /// assert!(err.to_string().starts_with("Configuration Error: POST_INTERVAL_SECS"));
    /// assert!(err.file.ends_with(".rs"));
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
