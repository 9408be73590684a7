//! Layered configuration.
//!
//! Sources, later overriding earlier:
//! 1. `linkpost.toml` in the working directory (optional), or the file
//!    passed with `--config` (required)
//! 2. Environment variables (`GEMINI_URL`, `CHAR_LIMIT`, ...)
//!
//! Keys are the lower-cased environment variable names:
//!
//! ```toml
//! gemini_url = "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
//! linkedin_person_urn = "urn:li:person:abc123"
//! char_limit = 280
//! post_interval_secs = 3600
//! ```

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use derive_getters::Getters;
use linkpost_core::ContentLimits;
use linkpost_error::{ConfigError, LinkpostResult};
use linkpost_models::{DEFAULT_GENERATION_TIMEOUT, GeminiConfig, GeminiConfigBuilder};
use linkpost_social::{DEFAULT_API_BASE, DEFAULT_SOCIAL_TIMEOUT, LinkedInConfig, LinkedInConfigBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_NAME: &str = "linkpost";

/// History file used when `POST_HISTORY_PATH` is unset.
pub const DEFAULT_HISTORY_PATH: &str = "post_history.json";

/// Scheduler interval used when `POST_INTERVAL_SECS` is unset.
pub const DEFAULT_POST_INTERVAL: Duration = Duration::from_secs(60);

/// HTTP listen address used when `BIND_ADDRESS` is unset.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

/// Flat settings as they appear in the file and the environment.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSettings {
    gemini_url: Option<String>,
    gemini_api_key: Option<String>,
    generation_prompt: Option<String>,
    generation_timeout_secs: Option<u64>,
    linkedin_access_token: Option<String>,
    linkedin_person_urn: Option<String>,
    linkedin_api_base: Option<String>,
    social_timeout_secs: Option<u64>,
    char_limit: Option<usize>,
    post_history_path: Option<PathBuf>,
    post_interval_secs: Option<u64>,
    bind_address: Option<String>,
}

/// Validated configuration, built once at startup.
///
/// Each component takes its own section by reference.
#[derive(Debug, Clone, Getters)]
pub struct LinkpostConfig {
    /// Content generator settings
    gemini: GeminiConfig,
    /// LinkedIn client settings
    linkedin: LinkedInConfig,
    /// Outgoing content limits
    limits: ContentLimits,
    /// History file location
    history_path: PathBuf,
    /// Scheduler interval
    post_interval: Duration,
    /// HTTP listen address
    bind_address: String,
}

impl LinkpostConfig {
    /// Load configuration from the optional file and the environment.
    ///
    /// With `path` set the file must exist; otherwise `linkpost.toml` is read
    /// from the working directory when present.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the offending key when a required key
    /// is missing or a value is invalid.
    #[instrument]
    pub fn load(path: Option<&Path>) -> LinkpostResult<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let builder = Config::builder()
            .add_source(file)
            .add_source(Environment::default());

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> LinkpostResult<Self> {
        let raw: RawSettings = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        let config = Self::from_raw(raw)?;
        debug!(?config, "Loaded configuration");
        Ok(config)
    }

    fn from_raw(raw: RawSettings) -> LinkpostResult<Self> {
        let mut gemini = GeminiConfigBuilder::default();
        gemini
            .url(required(raw.gemini_url, "GEMINI_URL")?)
            .timeout(
                raw.generation_timeout_secs
                    .map(Duration::from_secs)
                    .unwrap_or(DEFAULT_GENERATION_TIMEOUT),
            );
        if let Some(key) = non_empty(raw.gemini_api_key) {
            gemini.api_key(key);
        }
        if let Some(prompt) = non_empty(raw.generation_prompt) {
            gemini.prompt(prompt);
        }
        let gemini = gemini
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid Gemini settings: {}", e)))?;

        let linkedin = LinkedInConfigBuilder::default()
            .access_token(required(raw.linkedin_access_token, "LINKEDIN_ACCESS_TOKEN")?)
            .author_urn(required(raw.linkedin_person_urn, "LINKEDIN_PERSON_URN")?)
            .api_base(
                non_empty(raw.linkedin_api_base)
                    .map(|base| base.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            )
            .timeout(
                raw.social_timeout_secs
                    .map(Duration::from_secs)
                    .unwrap_or(DEFAULT_SOCIAL_TIMEOUT),
            )
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid LinkedIn settings: {}", e)))?;

        let char_limit = raw
            .char_limit
            .ok_or_else(|| ConfigError::new("CHAR_LIMIT is not set"))?;
        let limits = ContentLimits::new(char_limit)?;

        let post_interval = match raw.post_interval_secs {
            Some(0) => return Err(ConfigError::new("POST_INTERVAL_SECS must be greater than 0").into()),
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_POST_INTERVAL,
        };

        Ok(Self {
            gemini,
            linkedin,
            limits,
            history_path: raw
                .post_history_path
                .filter(|path| !path.as_os_str().is_empty())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_PATH)),
            post_interval,
            bind_address: non_empty(raw.bind_address)
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required(value: Option<String>, key: &str) -> Result<String, ConfigError> {
    non_empty(value).ok_or_else(|| ConfigError::new(format!("{} is not set", key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn parse(toml: &str) -> LinkpostResult<LinkpostConfig> {
        LinkpostConfig::from_builder(
            Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
        )
    }

    const MINIMAL: &str = r#"
        gemini_url = "http://localhost:9000/generate"
        linkedin_access_token = "token"
        linkedin_person_urn = "urn:li:person:me"
        char_limit = 280
    "#;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = parse(MINIMAL).unwrap();
        assert_eq!(config.gemini().url(), "http://localhost:9000/generate");
        assert!(config.gemini().api_key().is_none());
        assert_eq!(*config.gemini().timeout(), DEFAULT_GENERATION_TIMEOUT);
        assert_eq!(config.linkedin().api_base(), DEFAULT_API_BASE);
        assert_eq!(*config.linkedin().timeout(), DEFAULT_SOCIAL_TIMEOUT);
        assert_eq!(config.limits().char_limit(), 280);
        assert_eq!(config.history_path(), Path::new(DEFAULT_HISTORY_PATH));
        assert_eq!(*config.post_interval(), DEFAULT_POST_INTERVAL);
        assert_eq!(config.bind_address(), DEFAULT_BIND_ADDRESS);
    }

    #[test]
    fn test_overrides_are_applied() {
        let toml = format!(
            "{}\n{}",
            MINIMAL,
            r#"
            gemini_api_key = "key"
            generation_prompt = "Rust tip"
            generation_timeout_secs = 5
            linkedin_api_base = "http://localhost:9001/v2/"
            social_timeout_secs = 7
            post_history_path = "/tmp/history.json"
            post_interval_secs = 3600
            bind_address = "0.0.0.0:8080"
            "#
        );
        let config = parse(&toml).unwrap();
        assert_eq!(config.gemini().api_key().as_deref(), Some("key"));
        assert_eq!(config.gemini().prompt(), "Rust tip");
        assert_eq!(*config.gemini().timeout(), Duration::from_secs(5));
        assert_eq!(config.linkedin().api_base(), "http://localhost:9001/v2");
        assert_eq!(*config.linkedin().timeout(), Duration::from_secs(7));
        assert_eq!(config.history_path(), Path::new("/tmp/history.json"));
        assert_eq!(*config.post_interval(), Duration::from_secs(3600));
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_missing_required_key_is_named() {
        let err = parse("char_limit = 280").unwrap_err();
        assert!(err.to_string().contains("GEMINI_URL"), "{}", err);
    }

    #[test]
    fn test_missing_char_limit_is_named() {
        let toml = r#"
            gemini_url = "http://localhost:9000/generate"
            linkedin_access_token = "token"
            linkedin_person_urn = "urn:li:person:me"
        "#;
        let err = parse(toml).unwrap_err();
        assert!(err.to_string().contains("CHAR_LIMIT"), "{}", err);
    }

    #[test]
    fn test_char_limit_too_small_is_rejected() {
        let toml = MINIMAL.replace("char_limit = 280", "char_limit = 3");
        let err = parse(&toml).unwrap_err();
        assert!(err.to_string().contains("CHAR_LIMIT"), "{}", err);
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let toml = format!("{}\npost_interval_secs = 0", MINIMAL);
        let err = parse(&toml).unwrap_err();
        assert!(err.to_string().contains("POST_INTERVAL_SECS"), "{}", err);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let toml = format!("{}\ngemini_api_key = \"super-secret-key\"", MINIMAL)
            .replace("\"token\"", "\"super-secret-token\"");
        let config = parse(&toml).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-key"));
        assert!(!debug.contains("super-secret-token"));
        assert!(debug.contains("urn:li:person:me"));
    }
}
