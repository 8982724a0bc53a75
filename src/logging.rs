//! # Structured Logging Module
//!
//! Environment-aware structured logging for harness runs and binding calls.

use crate::config::{LogFormat, LoggingConfig};
use chrono::Utc;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging. Only the first call has any effect.
pub fn init_structured_logging(config: &LoggingConfig) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let log_level = config
            .level
            .clone()
            .unwrap_or_else(|| get_log_level(&environment).to_string());

        let filter = resolve_filter(std::env::var("RUST_LOG").ok().as_deref(), &log_level);
        let effective_filter = filter.to_string();

        let result = match config.format {
            LogFormat::Pretty => tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_level(true),
                )
                .try_init(),
            LogFormat::Json => tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_level(true)
                        .with_ansi(false)
                        .json(),
                )
                .try_init(),
        };

        // A host process embedding the library may already own the global subscriber
        if result.is_err() {
            tracing::debug!("Global tracing subscriber already initialized");
        }

        tracing::info!(
            environment = %environment,
            filter = %effective_filter,
            format = ?config.format,
            "Structured logging initialized"
        );
    });
}

/// `RUST_LOG` directives win over the configured level unless they fail to parse
fn resolve_filter(rust_log: Option<&str>, log_level: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(log_level))
}

/// Get current environment from environment variables
fn get_environment() -> String {
    std::env::var("DIMENSION_CORE_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        _ => "debug",
    }
}

/// Log a call made through the binding surface
pub fn log_binding_operation(operation: &str, status: &str, details: Option<&str>) {
    tracing::debug!(
        operation = %operation,
        status = %status,
        details = details,
        timestamp = %Utc::now().to_rfc3339(),
        "BINDING_OPERATION"
    );
}

/// Log the outcome of one smoke test
pub fn log_smoke_outcome(test: &str, status: &str, duration_ms: u64, message: Option<&str>) {
    if status == "failed" {
        tracing::error!(
            test = %test,
            status = %status,
            duration_ms = duration_ms,
            message = message,
            timestamp = %Utc::now().to_rfc3339(),
            "SMOKE_TEST"
        );
    } else {
        tracing::info!(
            test = %test,
            status = %status,
            duration_ms = duration_ms,
            message = message,
            timestamp = %Utc::now().to_rfc3339(),
            "SMOKE_TEST"
        );
    }
}
