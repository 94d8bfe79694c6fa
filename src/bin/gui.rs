use clap::Parser;
use fractal_zoom::{ExplorerConfig, RunGuiCommand};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize structured logging with env-based filter, defaulting to info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ExplorerConfig::parse();

    match RunGuiCommand::new(config).execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "explorer failed");
            ExitCode::FAILURE
        }
    }
}
