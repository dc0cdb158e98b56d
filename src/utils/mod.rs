//! Utility functions for the result artifact.
//!
//! ## Components
//!
//! - **Artifact**: CSV serialization of the job's result rows
//! - **Hashing**: SHA-256 calculation for file integrity
//!
//! ## Example
//!
//! ```no_run
//! use trusted_output_reporter::utils::artifact::write_result_artifact;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let info = write_result_artifact(Path::new("query_result.csv"))?;
//! println!("Wrote {} bytes ({})", info.size_bytes, info.sha256);
//! # Ok(())
//! # }
//! ```

pub mod artifact;
pub mod hash;
