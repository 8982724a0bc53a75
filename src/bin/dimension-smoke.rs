//! # Dimension Smoke Runner
//!
//! Command-line tool that runs the binding smoke tests and reports the result.
//! Exits non-zero when any selected test fails.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use dimension_core::config::ConfigManager;
use dimension_core::harness::SmokeRegistry;
use dimension_core::logging::init_structured_logging;
use std::path::PathBuf;
use std::process;
use tracing::error;

#[derive(Parser)]
#[command(name = "dimension-smoke")]
#[command(about = "Run binding smoke tests against the dimension schema")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output level (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the registered smoke tests
    Run {
        /// Only run tests whose name contains this substring
        #[arg(short, long)]
        filter: Option<String>,

        /// Stop after the first failure
        #[arg(long)]
        fail_fast: bool,

        /// Report format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List the registered smoke tests
    List,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

fn main() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("dimension-smoke failed: {e:#}");
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}

fn execute(cli: Cli) -> anyhow::Result<bool> {
    let mut config =
        ConfigManager::load(cli.config.as_deref()).context("loading harness configuration")?;

    if config.logging.level.is_none() {
        config.logging.level = match cli.verbose {
            0 => None,
            1 => Some("info".to_string()),
            2 => Some("debug".to_string()),
            _ => Some("trace".to_string()),
        };
    }
    init_structured_logging(&config.logging);

    let registry = SmokeRegistry::builtin();

    match cli.command.unwrap_or(Commands::Run {
        filter: None,
        fail_fast: false,
        format: OutputFormat::Table,
    }) {
        Commands::List => {
            for test in registry.tests() {
                println!("{:<30} {}", test.name, test.description);
            }
            Ok(true)
        }
        Commands::Run {
            filter,
            fail_fast,
            format,
        } => {
            if filter.is_some() {
                config.filter = filter;
            }
            config.fail_fast |= fail_fast;
            config.validate()?;

            let report = registry.run(&config);
            match format {
                OutputFormat::Table => println!("{report}"),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&report).context("serializing report")?
                ),
            }
            Ok(report.is_success())
        }
    }
}
