use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::core::{Matcher, Tokenizer};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    /// JSON catalog file; the embedded sample is used when unset
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default)]
    pub tokenizer: Tokenizer,
    #[serde(default = "default_smooth_idf")]
    pub smooth_idf: bool,
    pub default_limit: Option<usize>,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            tokenizer: Tokenizer::default(),
            smooth_idf: default_smooth_idf(),
            default_limit: None,
        }
    }
}

impl MatchingSettings {
    pub fn matcher(&self) -> Matcher {
        Matcher::new(self.tokenizer, self.smooth_idf)
    }
}

fn default_smooth_idf() -> bool { true }

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
fn default_log_format() -> String { "pretty".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with INTERN_MATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., INTERN_MATCH__MATCHING__TOKENIZER -> matching.tokenizer
            .add_source(env_source())
            .build()?;

        substitute_env_vars(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        substitute_env_vars(settings)?.try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("INTERN_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply the short-form catalog override
///
/// `INTERN_MATCH_CATALOG` is checked first, then `CATALOG_PATH`.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let catalog_path = env::var("INTERN_MATCH_CATALOG")
        .or_else(|_| env::var("CATALOG_PATH"))
        .ok();

    match catalog_path {
        Some(path) => Config::builder()
            .add_source(settings)
            .set_override("catalog.path", path)?
            .build(),
        None => Ok(settings),
    }
}
