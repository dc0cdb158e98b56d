//! # trusted-output-reporter
//!
//! Reports a job's status and uploads its results file to a remote
//! "trusted output" HTTP service using HTTP basic authentication.
//!
//! ## Overview
//!
//! A run is four steps, executed once each and in order:
//!
//! 1. Load configuration from `TRUSTED_OUTPUT_ENDPOINT` and
//!    `TRUSTED_OUTPUT_BASIC_AUTH`, failing before any I/O if either is missing
//! 2. Write the result table to `query_result.csv`
//! 3. `PUT {"status": "JOB-RUNNING"}` to the endpoint
//! 4. `POST` the CSV as multipart field `file` to `<endpoint>/upload`
//!
//! ## Usage
//!
//! ```no_run
//! use trusted_output_reporter::config::TrustedOutputConfig;
//! use trusted_output_reporter::reporter::{run_with_config, RunOptions};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = TrustedOutputConfig::from_env()?;
//! let report = run_with_config(config, &RunOptions::default()).await?;
//!
//! println!("Upload status: {}", report.upload_response.status);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`models`]: Job status, result row and artifact models
//! - [`config`]: Environment-driven configuration
//! - [`cloud`]: Trusted output HTTP client
//! - [`reporter`]: The sequential reporting job
//! - [`utils`]: Artifact writing and hashing
//! - [`security`]: Credential scrubbing for logs and errors
//! - [`constants`]: Application-wide constants

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Core data models
pub mod models;

/// Utility functions for the result artifact
pub mod utils;

/// Trusted output service integration
pub mod cloud;

/// Configuration loading from the environment
pub mod config;

/// The status-and-upload job
pub mod reporter;

/// Application constants and configuration values
pub mod constants;

/// Security utilities for credential protection
pub mod security;
