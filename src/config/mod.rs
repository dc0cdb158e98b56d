// Re-export all items from the submodules
mod credentials;
mod env_vars;
mod error;
mod trusted_output_config;

// Re-export credential parsing
pub use credentials::BasicAuthCredential;

// Re-export environment variable helpers
pub use env_vars::{process_env_lookup, require_var};

// Re-export configuration errors
pub use error::ConfigError;

// Re-export the trusted output configuration
pub use trusted_output_config::TrustedOutputConfig;
