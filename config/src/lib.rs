//! # Configuration Management for SQL Fiddler
//!
//! This crate provides the serializable configuration for a fragment builder:
//! the search expression, the order-by choices and the page-length choices.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{FiddlerConfig, SearchConfig};
//! use std::collections::HashMap;
//!
//! let config = FiddlerConfig::new(
//!     Some(SearchConfig::new("title LIKE :search".to_string(), "search".to_string())),
//!     HashMap::from([("_default".to_string(), "id DESC".to_string())]),
//!     HashMap::from([("_default".to_string(), 20)]),
//! );
//! assert!(config.validate().is_ok());
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [search]
//! template = "title LIKE :search"
//! marker = "search"
//! mode = "%%"
//!
//! [order_by]
//! _default = "id DESC"
//! title_asc = "title ASC"
//!
//! [page_length]
//! _default = 20
//! "50" = 50
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::FiddlerConfig;
//!
//! // Load from sqlfiddler.toml
//! let config = FiddlerConfig::load()?;
//!
//! // Or load from custom path
//! let config = FiddlerConfig::from_file("config/listing.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./sqlfiddler.toml";
const CONFIG_PATH_VAR: &str = "SQLFIDDLER_CONFIG";

/// Key every choice map must carry to answer requests without a choice.
pub const DEFAULT_CHOICE: &str = "_default";

/// Search mode used when none is configured (wrap the value in wildcards).
pub const DEFAULT_SEARCH_MODE: &str = "%%";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete fragment builder configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FiddlerConfig {
    #[serde(default)]
    pub search: Option<SearchConfig>,
    #[serde(default)]
    pub order_by: HashMap<String, String>,
    #[serde(default)]
    pub page_length: HashMap<String, i64>,
}

/// Search expression configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// SQL snippet returned when a search is active, e.g. `title LIKE :search`
    pub template: String,
    /// Bind-parameter name, without the leading colon
    pub marker: String,
    /// Decoration mode alias (`%%`, `%`, `s%`, `none`, ...)
    #[serde(default = "default_search_mode")]
    pub mode: String,
}

fn default_search_mode() -> String {
    DEFAULT_SEARCH_MODE.to_string()
}

impl FiddlerConfig {
    /// Create a new fragment builder configuration
    pub fn new(
        search: Option<SearchConfig>,
        order_by: HashMap<String, String>,
        page_length: HashMap<String, i64>,
    ) -> Self {
        Self {
            search,
            order_by,
            page_length,
        }
    }

    /// Load configuration from TOML file specified in .env or defaults
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is fine, a malformed one is not
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(err.into());
            }
        }

        if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Err(ConfigError::Invalid(format!(
                "Config path must be specified in .env file as {} or in {} file",
                CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH
            )))
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// The search mode alias is deliberately not checked here; it is
    /// resolved when a search is evaluated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(search) = &self.search {
            if search.marker.is_empty() {
                return Err(ConfigError::Invalid(
                    "Search marker cannot be empty".to_string(),
                ));
            }
            if search.marker.starts_with(':') {
                return Err(ConfigError::Invalid(format!(
                    "Search marker '{}' must be given without the leading colon",
                    search.marker
                )));
            }
        }

        if !self.order_by.is_empty() && !self.order_by.contains_key(DEFAULT_CHOICE) {
            return Err(ConfigError::Invalid(format!(
                "order_by map must define a {} entry",
                DEFAULT_CHOICE
            )));
        }

        if !self.page_length.is_empty() && !self.page_length.contains_key(DEFAULT_CHOICE) {
            return Err(ConfigError::Invalid(format!(
                "page_length map must define a {} entry",
                DEFAULT_CHOICE
            )));
        }
        if let Some((choice, length)) = self.page_length.iter().find(|(_, length)| **length <= 0) {
            return Err(ConfigError::Invalid(format!(
                "page_length '{}' must be greater than 0, got {}",
                choice, length
            )));
        }

        Ok(())
    }
}

impl SearchConfig {
    /// Create a new search configuration with the default wrap mode
    pub fn new(template: String, marker: String) -> Self {
        Self {
            template,
            marker,
            mode: default_search_mode(),
        }
    }

    pub fn with_mode(mut self, mode: &str) -> Self {
        self.mode = mode.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_TOML: &str = r#"
[search]
template = "title LIKE :search"
marker = "search"

[order_by]
_default = "id DESC"
title_asc = "title ASC"

[page_length]
_default = 20
"50" = 50
"#;

    #[test]
    fn test_parse_full_document() {
        let config = FiddlerConfig::from_toml_str(LISTING_TOML).unwrap();

        let search = config.search.as_ref().unwrap();
        assert_eq!(search.template, "title LIKE :search");
        assert_eq!(search.marker, "search");
        assert_eq!(search.mode, DEFAULT_SEARCH_MODE);

        assert_eq!(config.order_by.get("title_asc").map(String::as_str), Some("title ASC"));
        assert_eq!(config.page_length.get("50"), Some(&50));
    }

    #[test]
    fn test_empty_document_is_valid() {
        let config = FiddlerConfig::from_toml_str("").unwrap();
        assert_eq!(config, FiddlerConfig::default());
    }

    #[test]
    fn test_unknown_mode_is_accepted_at_load_time() {
        let config = FiddlerConfig::from_toml_str(
            "[search]\ntemplate = \"a LIKE :q\"\nmarker = \"q\"\nmode = \"bogus\"\n",
        )
        .unwrap();
        assert_eq!(config.search.unwrap().mode, "bogus");
    }

    #[test]
    fn test_missing_default_entries() {
        let err = FiddlerConfig::from_toml_str("[order_by]\nname = \"name ASC\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("order_by")));

        let err = FiddlerConfig::from_toml_str("[page_length]\n\"10\" = 10\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("page_length")));
    }

    #[test]
    fn test_invalid_values() {
        let test_cases = [
            "[search]\ntemplate = \"a\"\nmarker = \"\"\n",
            "[search]\ntemplate = \"a\"\nmarker = \":q\"\n",
            "[page_length]\n_default = 0\n",
            "[page_length]\n_default = 10\nbig = -5\n",
        ];

        for content in test_cases {
            let result = FiddlerConfig::from_toml_str(content);
            assert!(
                matches!(result, Err(ConfigError::Invalid(_))),
                "Should reject config: {}",
                content
            );
        }
    }

    #[test]
    fn test_malformed_toml() {
        let result = FiddlerConfig::from_toml_str("[order_by\n_default = ");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_from_missing_file() {
        let result = FiddlerConfig::from_file("./definitely/not/here.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_search_config_builder() {
        let search = SearchConfig::new("a LIKE :q".to_string(), "q".to_string()).with_mode("s%");
        assert_eq!(search.mode, "s%");
    }
}
