use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};

use crate::cloud::response::{ApiResponse, ResponseBody};
use crate::config::TrustedOutputConfig;
use crate::constants::{
    ERROR_FAILED_TO_READ_ARTIFACT, ERROR_FAILED_TO_REPORT_STATUS, ERROR_FAILED_TO_UPLOAD,
    UPLOAD_FORM_FIELD,
};
use crate::models::StatusUpdate;
use crate::security::scrub_credentials;

/// Operations the trusted output service exposes to a running job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrustedOutputApi: Send + Sync {
    /// PUT a status update to the job endpoint.
    async fn put_status(&self, update: &StatusUpdate) -> Result<ApiResponse>;

    /// POST the file at `path` as a multipart upload.
    async fn upload_file(&self, path: &Path) -> Result<ApiResponse>;
}

/// HTTP client for the trusted output service.
///
/// Every request carries the configured basic-auth credential.
pub struct TrustedOutputClient {
    http: Client,
    config: TrustedOutputConfig,
}

impl TrustedOutputClient {
    /// Create a client. `timeout` of `None` leaves requests unbounded.
    pub fn new(config: TrustedOutputConfig, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &TrustedOutputConfig {
        &self.config
    }

    fn authenticated(&self, request: RequestBuilder) -> RequestBuilder {
        let credential = &self.config.credential;
        request.basic_auth(credential.username(), Some(credential.password()))
    }
}

/// Read the status code and decode the body of a response.
async fn read_response(response: Response) -> Result<ApiResponse> {
    let status = response.status().as_u16();
    let raw = response
        .text()
        .await
        .context("Failed to read response body")?;
    Ok(ApiResponse::new(status, ResponseBody::decode(raw)))
}

/// Name sent as the multipart filename: the file's own name.
fn upload_file_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow!("Artifact path has no file name: {}", path.display()))
}

#[async_trait]
impl TrustedOutputApi for TrustedOutputClient {
    async fn put_status(&self, update: &StatusUpdate) -> Result<ApiResponse> {
        let url = &self.config.endpoint;
        debug!("PUT {} status={}", scrub_credentials(url), update.status);

        let response = self
            .authenticated(self.http.put(url.as_str()))
            .json(update)
            .send()
            .await
            .context(ERROR_FAILED_TO_REPORT_STATUS)?;

        read_response(response).await
    }

    async fn upload_file(&self, path: &Path) -> Result<ApiResponse> {
        let url = self.config.upload_url();
        let file_name = upload_file_name(path)?;

        // The file is read in full and closed before the request goes out
        let contents = tokio::fs::read(path)
            .await
            .with_context(|| format!("{}: {}", ERROR_FAILED_TO_READ_ARTIFACT, path.display()))?;
        debug!(
            "POST {} field={} file={} ({} bytes)",
            scrub_credentials(&url),
            UPLOAD_FORM_FIELD,
            file_name,
            contents.len()
        );

        let form = Form::new().part(UPLOAD_FORM_FIELD, Part::bytes(contents).file_name(file_name));

        let response = self
            .authenticated(self.http.post(url.as_str()))
            .multipart(form)
            .send()
            .await
            .context(ERROR_FAILED_TO_UPLOAD)?;

        read_response(response).await
    }
}
