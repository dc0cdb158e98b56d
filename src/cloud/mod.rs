//! Trusted output service integration.
//!
//! The service exposes two authenticated calls to a running job:
//!
//! ```text
//! ┌──────────────┐  PUT {endpoint}          ┌──────────────────┐
//! │   Reporter   │─────────────────────────▶│                  │
//! │              │  {"status": "..."}       │  Trusted Output  │
//! │              │                          │       App        │
//! │              │  POST {endpoint}/upload  │                  │
//! │              │─────────────────────────▶│                  │
//! └──────────────┘  multipart field "file"  └──────────────────┘
//! ```
//!
//! Both calls use HTTP basic authentication. Response bodies are decoded into
//! [`response::ResponseBody`], JSON when possible and raw text otherwise.
//!
//! ## Usage Example
//!
//! ```no_run
//! use trusted_output_reporter::cloud::client::{TrustedOutputApi, TrustedOutputClient};
//! use trusted_output_reporter::config::TrustedOutputConfig;
//! use trusted_output_reporter::models::{JobStatus, StatusUpdate};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = TrustedOutputConfig::from_env()?;
//! let client = TrustedOutputClient::new(config, None)?;
//!
//! let response = client.put_status(&StatusUpdate::new(JobStatus::JobRunning)).await?;
//! println!("{} {}", response.status, response.body);
//! # Ok(())
//! # }
//! ```

/// HTTP client and the API trait it implements
pub mod client;

/// Decoded response types
pub mod response;
