use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::DEFAULT_ARTIFACT_NAME;
use crate::models::JobStatus;
use crate::reporter::RunOptions;

/// Command-line arguments for the trusted output reporter.
///
/// The service endpoint and credential always come from the
/// `TRUSTED_OUTPUT_ENDPOINT` and `TRUSTED_OUTPUT_BASIC_AUTH` environment
/// variables. Every flag here is optional and the defaults reproduce a plain
/// status-then-upload run.
#[derive(Parser, Debug)]
#[clap(
    name = "trusted-output-reporter",
    about = "Report job status and upload results to a trusted output service"
)]
pub struct Args {
    /// Path of the result CSV written before upload
    #[clap(short, long, default_value = DEFAULT_ARTIFACT_NAME)]
    pub output: PathBuf,

    /// Job status sent with the status update
    #[clap(long, value_enum, default_value_t = JobStatus::JobRunning)]
    pub status: JobStatus,

    /// Per-request timeout in seconds (default: wait indefinitely)
    #[clap(long)]
    pub timeout_secs: Option<u64>,

    /// Exit with a non-zero code when the upload is rejected
    #[clap(long)]
    pub strict: bool,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            artifact_path: self.output.clone(),
            status: self.status,
            timeout: self.timeout_secs.map(Duration::from_secs),
            strict: self.strict,
        }
    }
}
