//! The reporting job: write the result artifact, report status, upload.
//!
//! Steps run strictly in order and each is attempted exactly once. A failing
//! step that raises ends the run; an upload rejected by the service is logged
//! and reported through [`RunReport`] instead.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Result};
use log::{error, info};

use crate::cloud::client::{TrustedOutputApi, TrustedOutputClient};
use crate::cloud::response::ApiResponse;
use crate::config::TrustedOutputConfig;
use crate::constants::DEFAULT_ARTIFACT_NAME;
use crate::models::{ArtifactInfo, JobStatus, StatusUpdate};
use crate::security::scrub_credentials;
use crate::utils::artifact::write_result_artifact;

/// Knobs for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Where the result CSV is written before upload
    pub artifact_path: PathBuf,
    /// Status sent in the PUT body
    pub status: JobStatus,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Turn a rejected upload into an error
    pub strict: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            artifact_path: PathBuf::from(DEFAULT_ARTIFACT_NAME),
            status: JobStatus::default(),
            timeout: None,
            strict: false,
        }
    }
}

/// Everything observed during a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub artifact: ArtifactInfo,
    pub status_response: ApiResponse,
    pub upload_response: ApiResponse,
}

impl RunReport {
    pub fn upload_succeeded(&self) -> bool {
        self.upload_response.is_upload_success()
    }

    /// Process exit code for this run.
    ///
    /// A rejected upload only changes the exit code in strict mode.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if strict && !self.upload_succeeded() {
            1
        } else {
            0
        }
    }

    /// Fail in strict mode when the upload was rejected.
    pub fn enforce(&self, strict: bool) -> Result<()> {
        if self.exit_code(strict) != 0 {
            return Err(anyhow!(
                "Upload rejected by trusted output service with status {}",
                self.upload_response.status
            ));
        }
        Ok(())
    }
}

/// Final log line for an upload response.
pub fn upload_outcome_message(response: &ApiResponse) -> String {
    if response.is_upload_success() {
        "File uploaded successfully".to_string()
    } else {
        format!("Failed to upload file. Status code: {}", response.status)
    }
}

/// Send the status update and log whatever came back.
///
/// The response status is not checked here.
pub async fn report_status<A>(api: &A, status: JobStatus) -> Result<ApiResponse>
where
    A: TrustedOutputApi + ?Sized,
{
    let response = api.put_status(&StatusUpdate::new(status)).await?;
    info!("Status update response: {}", response.body);
    Ok(response)
}

/// Upload the artifact, log the response and the outcome.
///
/// A non-200 status is logged as a failure but is not an error.
pub async fn upload_artifact<A>(api: &A, path: &Path) -> Result<ApiResponse>
where
    A: TrustedOutputApi + ?Sized,
{
    let response = api.upload_file(path).await?;
    info!("Upload response: {}", response.body);

    let message = upload_outcome_message(&response);
    if response.is_upload_success() {
        info!("{}", message);
    } else {
        error!("{}", message);
    }

    Ok(response)
}

/// Run the artifact, status and upload steps against `api`.
pub async fn run<A>(api: &A, options: &RunOptions) -> Result<RunReport>
where
    A: TrustedOutputApi + ?Sized,
{
    let artifact = write_result_artifact(&options.artifact_path)?;
    let status_response = report_status(api, options.status).await?;
    let upload_response = upload_artifact(api, &artifact.path).await?;

    Ok(RunReport {
        artifact,
        status_response,
        upload_response,
    })
}

/// Run against the real service described by `config`.
pub async fn run_with_config(config: TrustedOutputConfig, options: &RunOptions) -> Result<RunReport> {
    info!(
        "Reporting job status {} to {}",
        options.status,
        scrub_credentials(&config.endpoint)
    );
    let client = TrustedOutputClient::new(config, options.timeout)?;
    run(&client, options).await
}

/// Load configuration through `lookup`, then run.
///
/// A configuration error is returned before anything is written or sent.
pub async fn run_from_lookup<F>(lookup: F, options: &RunOptions) -> Result<RunReport>
where
    F: Fn(&str) -> Option<String>,
{
    let config = TrustedOutputConfig::from_lookup(lookup)?;
    run_with_config(config, options).await
}
