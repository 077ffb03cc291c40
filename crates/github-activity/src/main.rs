use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use github_activity::{app, Args};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match app::run(&args, || std::io::stdout().lock()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Run failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only the activity lines.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "github_activity=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
