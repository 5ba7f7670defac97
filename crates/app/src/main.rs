//! Sitecheck - Main Entry Point
//!
//! Wires the reqwest client and console reporter to the check harness,
//! runs the fixed check sequence, and turns the verdict into the process
//! exit code.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sitecheck_application::run_site_checks;
use sitecheck_domain::{SiteProfile, DEFAULT_BASE_URL};
use sitecheck_infrastructure::{ConsoleReporter, ReqwestHttpClient};

/// Smoke-checks a running static website.
#[derive(Debug, Parser)]
#[command(name = "sitecheck", version, about)]
struct Cli {
    /// Base URL of the site under test.
    #[arg(long, env = "SITECHECK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let profile = match SiteProfile::default().with_base_url(&cli.base_url) {
        Ok(profile) => profile.with_timeout_ms(cli.timeout_secs.saturating_mul(1000)),
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let client = match ReqwestHttpClient::new() {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Error: failed to build HTTP client: {err}");
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Error: failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    let summary = runtime.block_on(run_site_checks(&profile, &client, ConsoleReporter::new()));
    ExitCode::from(summary.verdict().exit_code())
}

/// Diagnostics go to stderr behind `RUST_LOG`; the stdout report stays
/// clean for people and CI logs.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
