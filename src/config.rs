//! Page Configuration
//!
//! Settings are read once at startup from `<meta>` tags of the host page:
//!
//! ```html
//! <meta name="todo-api-base" content="/api">
//! <meta name="todo-log-level" content="debug">
//! ```
//!
//! A relative `todo-api-base` is resolved against the page origin.

use std::str::FromStr;

use log::LevelFilter;
use reqwest::Url;
use thiserror::Error;

const API_BASE_META: &str = "todo-api-base";
const LOG_LEVEL_META: &str = "todo-log-level";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("page origin {origin:?} is not a base URL: {reason}")]
    InvalidOrigin { origin: String, reason: String },

    #[error("todo-api-base {value:?} is not a valid URL: {reason}")]
    InvalidApiBase { value: String, reason: String },

    #[error("todo-log-level {0:?} is not a log level")]
    InvalidLogLevel(String),
}

/// Raw values found on the page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSettings {
    pub origin: String,
    pub api_base: Option<String>,
    pub log_level: Option<String>,
}

impl PageSettings {
    /// Read origin and meta tags from the current document
    pub fn read() -> Self {
        let window = web_sys::window();
        let origin = window
            .as_ref()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        let document = window.and_then(|w| w.document());
        let meta = |name: &str| {
            document
                .as_ref()
                .and_then(|d| d.query_selector(&format!("meta[name=\"{name}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"))
        };

        Self {
            origin,
            api_base: meta(API_BASE_META),
            log_level: meta(LOG_LEVEL_META),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Absolute URL `/todos` hangs off, without trailing slash
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn from_document() -> (Self, Vec<ConfigError>) {
        Self::resolve(&PageSettings::read())
    }

    /// Resolve raw settings. Every invalid value falls back to its default
    /// and is reported alongside the config.
    pub fn resolve(settings: &PageSettings) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut problems = Vec::new();

        let origin = match Url::parse(&settings.origin) {
            Ok(url) => Some(url),
            Err(e) => {
                problems.push(ConfigError::InvalidOrigin {
                    origin: settings.origin.clone(),
                    reason: e.to_string(),
                });
                None
            }
        };

        let api_base = match (&settings.api_base, &origin) {
            (Some(value), Some(origin)) => Some(origin.join(value)),
            (Some(value), None) => Some(Url::parse(value)),
            (None, Some(origin)) => Some(Ok(origin.clone())),
            (None, None) => None,
        };
        match api_base {
            Some(Ok(url)) => config.api_base = url.as_str().trim_end_matches('/').to_string(),
            Some(Err(e)) => {
                let value = settings.api_base.clone().unwrap_or_default();
                problems.push(ConfigError::InvalidApiBase { value, reason: e.to_string() });
                if let Some(origin) = &origin {
                    config.api_base = origin.as_str().trim_end_matches('/').to_string();
                }
            }
            None => {}
        }

        if let Some(level) = &settings.log_level {
            match LevelFilter::from_str(level.trim()) {
                Ok(level) => config.log_level = level,
                Err(_) => problems.push(ConfigError::InvalidLogLevel(level.clone())),
            }
        }

        (config, problems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(origin: &str, api_base: Option<&str>, log_level: Option<&str>) -> PageSettings {
        PageSettings {
            origin: origin.to_string(),
            api_base: api_base.map(str::to_string),
            log_level: log_level.map(str::to_string),
        }
    }

    #[test]
    fn test_defaults_to_page_origin() {
        let (config, problems) = AppConfig::resolve(&settings("http://localhost:8080", None, None));
        assert!(problems.is_empty());
        assert_eq!(config.api_base, "http://localhost:8080");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_relative_base_joins_origin() {
        let (config, problems) = AppConfig::resolve(&settings("https://todo.example", Some("/api/"), None));
        assert!(problems.is_empty());
        assert_eq!(config.api_base, "https://todo.example/api");
    }

    #[test]
    fn test_absolute_base_wins() {
        let (config, _) = AppConfig::resolve(&settings(
            "http://localhost:8080",
            Some("http://localhost:3000"),
            None,
        ));
        assert_eq!(config.api_base, "http://localhost:3000");
    }

    #[test]
    fn test_absolute_base_without_usable_origin() {
        // file:// pages report the opaque origin "null"
        let (config, problems) = AppConfig::resolve(&settings("null", Some("http://localhost:3000"), None));
        assert_eq!(config.api_base, "http://localhost:3000");
        assert!(matches!(problems[..], [ConfigError::InvalidOrigin { .. }]));
    }

    #[test]
    fn test_bad_base_falls_back_to_origin() {
        let (config, problems) = AppConfig::resolve(&settings("http://localhost:8080", Some("http://[::1"), None));
        assert_eq!(config.api_base, "http://localhost:8080");
        assert!(matches!(problems[..], [ConfigError::InvalidApiBase { .. }]));
    }

    #[test]
    fn test_log_level_parsing() {
        let (config, problems) = AppConfig::resolve(&settings("http://localhost", None, Some("DEBUG")));
        assert!(problems.is_empty());
        assert_eq!(config.log_level, LevelFilter::Debug);

        let (config, problems) = AppConfig::resolve(&settings("http://localhost", None, Some("loud")));
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(problems, vec![ConfigError::InvalidLogLevel("loud".to_string())]);
    }
}
