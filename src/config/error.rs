use thiserror::Error;

/// Errors raised while building the configuration.
///
/// All of these are fatal and are reported before any file or network
/// activity takes place.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set or empty")]
    MissingVariable(&'static str),

    #[error("environment variable {0} must be in username:password form")]
    MalformedCredential(&'static str),
}
