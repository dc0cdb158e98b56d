use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use tokio::runtime::Runtime;

use trusted_output_reporter::cli::Args;
use trusted_output_reporter::config::TrustedOutputConfig;
use trusted_output_reporter::reporter::{self, RunOptions};
use trusted_output_reporter::security::safe_error_message;

fn main() -> Result<()> {
    // Parse arguments
    let args = Args::parse();

    // Initialize logging
    initialize_logging(args.verbose)?;

    let options = args.run_options();

    // Configuration is validated before anything touches disk or network
    let config = TrustedOutputConfig::from_env()?;

    run_reporter(config, &options)
        .map_err(|e| anyhow!(safe_error_message("Trusted output reporting failed", &e)))
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ).context("Failed to initialize logger")?;
    Ok(())
}

/// Run the job to completion and apply the exit policy
fn run_reporter(config: TrustedOutputConfig, options: &RunOptions) -> Result<()> {
    let runtime = Runtime::new().context("Failed to create Tokio runtime")?;

    let report = runtime.block_on(reporter::run_with_config(config, options))?;

    report.enforce(options.strict)?;

    info!("Trusted output reporting finished");
    Ok(())
}
