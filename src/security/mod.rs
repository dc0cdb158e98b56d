//! Security utilities.
//!
//! The reporter handles a static basic-auth credential; this module keeps that
//! credential out of log lines and error messages.

pub mod credential_scrubber;

pub use credential_scrubber::{safe_error_message, scrub_credentials};
