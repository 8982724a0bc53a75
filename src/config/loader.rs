//! Configuration Loader
//!
//! Layers the optional configuration file and environment overrides on top of
//! the built-in defaults, then validates the result.

use super::HarnessConfig;
use crate::error::{Result, SchemaError};
use config::{Config, Environment, File};
use std::path::Path;
use tracing::debug;

/// Prefix for environment overrides, e.g. `DIMENSION_CORE__FAIL_FAST=true`
pub const ENV_PREFIX: &str = "DIMENSION_CORE";

pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from defaults, `path` (if given) and the environment
    pub fn load(path: Option<&Path>) -> Result<HarnessConfig> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    /// Load configuration reading environment overrides under `prefix`
    pub fn load_with_prefix(path: Option<&Path>, prefix: &str) -> Result<HarnessConfig> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            debug!(path = %path.display(), "Loading harness configuration file");
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: HarnessConfig = builder
            .add_source(
                Environment::with_prefix(prefix)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| SchemaError::Configuration(e.to_string()))?;

        config.validate()?;

        debug!(
            fail_fast = config.fail_fast,
            filter = config.filter.as_deref(),
            "Harness configuration loaded"
        );

        Ok(config)
    }
}
