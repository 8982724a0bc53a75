//! # Harness Configuration
//!
//! Configuration for the binding smoke-test harness. Values come from built-in
//! defaults, an optional configuration file and `DIMENSION_CORE__*`
//! environment overrides, in that order of precedence.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dimension_core::config::ConfigManager;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigManager::load(None)?;
//! println!("fail fast: {}", config.fail_fast);
//! # Ok(())
//! # }
//! ```

pub mod loader;

use crate::error::{Result, SchemaError};
use serde::{Deserialize, Serialize};

pub use loader::ConfigManager;

const KNOWN_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Root configuration for a harness run
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Stop after the first failing test
    pub fail_fast: bool,

    /// Only run tests whose name contains this substring
    pub filter: Option<String>,

    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Explicit log level; derived from the environment name when unset
    pub level: Option<String>,

    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl HarnessConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = &self.logging.level {
            if !KNOWN_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(SchemaError::Configuration(format!(
                    "unknown log level '{level}', expected one of {KNOWN_LEVELS:?}"
                )));
            }
        }
        if matches!(&self.filter, Some(filter) if filter.trim().is_empty()) {
            return Err(SchemaError::Configuration(
                "filter must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether the named test is selected by the configured filter
    pub fn selects(&self, test_name: &str) -> bool {
        self.filter
            .as_deref()
            .map_or(true, |filter| test_name.contains(filter))
    }
}
