use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use crate::core::status::{StatusBoundary, StatusClassifier, DEFAULT_EVENT_DURATION_DAYS};
use crate::core::matcher::{ThemeMatch, DEFAULT_FUZZY_THRESHOLD};
use crate::models::ReplyOptions;

/// Backend URL used when nothing else is configured
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub backend: BackendSettings,
    #[serde(default)]
    pub assistant: AssistantSettings,
    #[serde(default)]
    pub status: StatusSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
    #[serde(default = "default_chat_body_limit")]
    pub chat_body_limit: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            chat_body_limit: default_chat_body_limit(),
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }
fn default_chat_body_limit() -> usize { 1024 * 1024 }

#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    #[serde(default = "default_backend_url")]
    pub base_url: String,
    /// Unset means requests to the backend never time out
    pub request_timeout_secs: Option<u64>,
}

impl BackendSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            request_timeout_secs: None,
        }
    }
}

fn default_backend_url() -> String { DEFAULT_BACKEND_URL.to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct AssistantSettings {
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
    #[serde(default = "default_list_limit")]
    pub prize_limit: usize,
    #[serde(default)]
    pub link_base: String,
    #[serde(default)]
    pub theme_match: ThemeMatch,
}

impl AssistantSettings {
    pub fn reply_options(&self) -> ReplyOptions {
        ReplyOptions {
            fuzzy_threshold: self.fuzzy_threshold,
            list_limit: self.list_limit,
            prize_limit: self.prize_limit,
            link_base: self.link_base.clone(),
            theme_match: self.theme_match,
        }
    }
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_fuzzy_threshold(),
            list_limit: default_list_limit(),
            prize_limit: default_list_limit(),
            link_base: String::new(),
            theme_match: ThemeMatch::Substring,
        }
    }
}

fn default_fuzzy_threshold() -> f64 { DEFAULT_FUZZY_THRESHOLD }
fn default_list_limit() -> usize { 5 }

#[derive(Debug, Clone, Deserialize)]
pub struct StatusSettings {
    #[serde(default = "default_event_duration_days")]
    pub event_duration_days: i64,
    #[serde(default)]
    pub chat_boundary: StatusBoundary,
    #[serde(default = "default_listing_boundary")]
    pub listing_boundary: StatusBoundary,
}

impl StatusSettings {
    pub fn chat_classifier(&self) -> StatusClassifier {
        StatusClassifier::new(self.chat_boundary, self.event_duration_days)
    }

    pub fn listing_classifier(&self) -> StatusClassifier {
        StatusClassifier::new(self.listing_boundary, self.event_duration_days)
    }
}

impl Default for StatusSettings {
    fn default() -> Self {
        Self {
            event_duration_days: default_event_duration_days(),
            chat_boundary: StatusBoundary::Window,
            listing_boundary: default_listing_boundary(),
        }
    }
}

fn default_event_duration_days() -> i64 { DEFAULT_EVENT_DURATION_DAYS }
fn default_listing_boundary() -> StatusBoundary { StatusBoundary::StartPassed }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration files (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with HACKHUB__)
    /// 4. NEXT_PUBLIC_API_URL, LOG_LEVEL and LOG_FORMAT
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HACKHUB__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HACKHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        substitute_env_vars(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HACKHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        substitute_env_vars(settings)?.try_deserialize()
    }
}

/// Apply the well-known environment variables shared with the web frontend
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(api_url) = env::var("NEXT_PUBLIC_API_URL") {
        builder = builder.set_override("backend.base_url", api_url)?;
    }
    if let Ok(level) = env::var("LOG_LEVEL") {
        builder = builder.set_override("logging.level", level)?;
    }
    if let Ok(format) = env::var("LOG_FORMAT") {
        builder = builder.set_override("logging.format", format)?;
    }

    builder.build()
}
