use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

/// Runtime configuration shared by the document and entity services.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Fixed port for the document service; a free port is scanned when absent.
    pub doc_server_port: Option<u16>,
    /// Fixed port for the entity service; a free port is scanned when absent.
    pub ner_server_port: Option<u16>,
    /// Sentences must be strictly longer than this to take part in phrase grouping.
    pub min_sentence_chars: usize,
    /// Person names must be strictly longer than this to take part in people grouping.
    pub min_person_chars: usize,
    /// Request body limit applied to `POST /upload`.
    pub max_upload_bytes: usize,
    /// Log file path; each binary defaults to `logs/<service>.log` when unset.
    pub log_file: Option<PathBuf>,
}

/// Default minimum sentence length (exclusive) for shared-phrase grouping.
pub const DEFAULT_MIN_SENTENCE_CHARS: usize = 10;
/// Default minimum person-name length (exclusive) for shared-people grouping.
pub const DEFAULT_MIN_PERSON_CHARS: usize = 3;
/// Default upload body limit (50 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

impl Default for Config {
    fn default() -> Self {
        Self {
            doc_server_port: None,
            ner_server_port: None,
            min_sentence_chars: DEFAULT_MIN_SENTENCE_CHARS,
            min_person_chars: DEFAULT_MIN_PERSON_CHARS,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, performing validation along the way.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();
        Ok(Self {
            doc_server_port: parse_optional(get("DOCLENS_PORT"), "DOCLENS_PORT")?,
            ner_server_port: parse_optional(get("DOCLENS_NER_PORT"), "DOCLENS_NER_PORT")?,
            min_sentence_chars: parse_optional(
                get("DOCLENS_MIN_SENTENCE_CHARS"),
                "DOCLENS_MIN_SENTENCE_CHARS",
            )?
            .unwrap_or(defaults.min_sentence_chars),
            min_person_chars: parse_optional(
                get("DOCLENS_MIN_PERSON_CHARS"),
                "DOCLENS_MIN_PERSON_CHARS",
            )?
            .unwrap_or(defaults.min_person_chars),
            max_upload_bytes: parse_optional(
                get("DOCLENS_MAX_UPLOAD_BYTES"),
                "DOCLENS_MAX_UPLOAD_BYTES",
            )?
            .unwrap_or(defaults.max_upload_bytes),
            log_file: get("DOCLENS_LOG_FILE").map(|raw| PathBuf::from(raw.trim())),
        })
    }
}

fn parse_optional<T: std::str::FromStr>(
    value: Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    value
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key.to_string()))
        })
        .transpose()
}

/// Global configuration cache populated during process start.
pub static CONFIG: OnceLock<Config> = OnceLock::new();

/// Retrieve the loaded configuration, falling back to defaults when it was never initialized.
pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

/// Load configuration from the environment and install it in the global cache.
///
/// Runs before tracing is installed; callers log the result with [`crate::logging::log_config`].
pub fn init_config() -> Result<&'static Config, ConfigError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    Ok(CONFIG.get_or_init(|| config))
}
