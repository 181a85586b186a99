//! genderize-fetch
//!
//! Looks up a name against a gender-prediction JSON API, with a hard
//! deadline and a waiting animation, then prints the pretty-printed payload.
//!
//! # Architecture Overview
//!
//! ```text
//!   CLI args + optional TOML
//!        │
//!        ▼
//!   ┌──────────┐    ┌──────────────┐    ┌─────────────────────────────┐
//!   │  config  │───▶│ LookupClient │───▶│ http::request (build GET)   │
//!   └──────────┘    └──────┬───────┘    └──────────────┬──────────────┘
//!                          │                           ▼
//!                          │            ┌─────────────────────────────┐
//!                          │            │ resilience::timeouts        │
//!                          │            │  spawn ─▶ http::client      │
//!                          │            │  select: deadline │ result  │
//!                          │            │          │ progress tick    │
//!                          │            └──────────────┬──────────────┘
//!                          ▼                           ▼
//!                   ┌──────────────┐    ┌─────────────────────────────┐
//!                   │    stdout    │◀───│ format::json (re-indent)    │
//!                   └──────────────┘    └─────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use genderize_fetch::config::{load_or_default, validate_config, LookupConfig};
use genderize_fetch::observability::init_logging;
use genderize_fetch::progress::{ProgressReporter, SilentProgress, TerminalProgress};
use genderize_fetch::LookupClient;

#[derive(Parser)]
#[command(name = "genderize-fetch")]
#[command(about = "Predict the gender of a first name, with a hard timeout", long_about = None)]
struct Cli {
    /// Name to look up (appended to the URL as-is).
    #[arg(default_value = "sam")]
    name: String,

    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the endpoint base URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Override the request timeout in milliseconds.
    #[arg(short, long)]
    timeout_ms: Option<u64>,

    /// Do not draw the waiting animation.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut LookupConfig) {
        if let Some(base_url) = &self.base_url {
            config.endpoint.base_url = base_url.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.timeouts.request_ms = timeout_ms;
        }
        if self.quiet {
            config.progress.enabled = false;
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    cli.apply_overrides(&mut config);

    if let Err(errors) = validate_config(&config) {
        for error in errors {
            eprintln!("invalid configuration: {}", error);
        }
        return ExitCode::FAILURE;
    }

    init_logging(&config.observability);

    tracing::info!(
        base_url = %config.endpoint.base_url,
        timeout_ms = config.timeouts.request_ms,
        "Configuration loaded"
    );

    let mut progress: Box<dyn ProgressReporter> = if config.progress.enabled {
        Box::new(TerminalProgress::stdout(config.progress.label.clone()))
    } else {
        Box::new(SilentProgress)
    };

    let client = match LookupClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("an error occurred when fetching data: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match client.run(&cli.name, progress.as_mut()).await {
        Ok(report) => {
            println!(" Result: {}", report.formatted);
            println!("Took: {:?}", report.elapsed);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = %e, "Lookup failed");
            eprintln!("an error occurred when fetching data: {}", e);
            ExitCode::FAILURE
        }
    }
}
