//! Global constants for the trusted output reporter.
//!
//! This module centralizes all hardcoded values so the wire contract with the
//! trusted output service lives in one place.

// Environment variables
/// Base URL of the trusted output service
pub const ENDPOINT_ENV_VAR: &str = "TRUSTED_OUTPUT_ENDPOINT";

/// Basic-auth credential in `username:password` form
pub const BASIC_AUTH_ENV_VAR: &str = "TRUSTED_OUTPUT_BASIC_AUTH";

// Trusted output API
/// Path segment appended to the endpoint for artifact uploads
pub const UPLOAD_PATH: &str = "upload";

/// Multipart form field carrying the artifact
pub const UPLOAD_FORM_FIELD: &str = "file";

/// The only upload status treated as success
pub const UPLOAD_SUCCESS_STATUS: u16 = 200;

// Artifact
/// Default artifact file name, relative to the working directory
pub const DEFAULT_ARTIFACT_NAME: &str = "query_result.csv";

/// Value written to the single result row
pub const RESULT_VALUE: i64 = 80;

/// Buffer size used when hashing the artifact (64KB)
pub const HASH_BUFFER_SIZE: usize = 64 * 1024;

// Error messages
pub const ERROR_FAILED_TO_WRITE_ARTIFACT: &str = "Failed to write result artifact";
pub const ERROR_FAILED_TO_READ_ARTIFACT: &str = "Failed to read result artifact";
pub const ERROR_FAILED_TO_REPORT_STATUS: &str = "Failed to send status update";
pub const ERROR_FAILED_TO_UPLOAD: &str = "Failed to upload file";
