use log::debug;

use super::{process_env_lookup, require_var, BasicAuthCredential, ConfigError};
use crate::constants::{BASIC_AUTH_ENV_VAR, ENDPOINT_ENV_VAR, UPLOAD_PATH};
use crate::security::scrub_credentials;

/// Connection settings for the trusted output service.
///
/// Built once at startup and handed to the client; nothing else reads the
/// environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrustedOutputConfig {
    /// Base URL of the service, used as-is for status updates
    pub endpoint: String,

    /// Basic-auth credential sent with every request
    pub credential: BasicAuthCredential,
}

impl TrustedOutputConfig {
    pub fn new(endpoint: impl Into<String>, credential: BasicAuthCredential) -> Self {
        Self {
            endpoint: endpoint.into(),
            credential,
        }
    }

    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(process_env_lookup)
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Both variables are checked for presence before the credential is
    /// parsed, so a missing endpoint is reported even when the credential is
    /// also malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = require_var(&lookup, ENDPOINT_ENV_VAR)?;
        let raw_credential = require_var(&lookup, BASIC_AUTH_ENV_VAR)?;
        let credential = BasicAuthCredential::parse(&raw_credential, BASIC_AUTH_ENV_VAR)?;

        debug!(
            "Loaded trusted output configuration for {} as user '{}'",
            scrub_credentials(&endpoint),
            credential.username()
        );

        Ok(Self::new(endpoint, credential))
    }

    /// URL the artifact is posted to: `<endpoint>/upload`.
    pub fn upload_url(&self) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), UPLOAD_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_valid() {
        let config = TrustedOutputConfig::from_lookup(lookup_from(&[
            (ENDPOINT_ENV_VAR, "https://trusted.example.com/api/job/42"),
            (BASIC_AUTH_ENV_VAR, "alice:p@ss:word"),
        ]))
        .unwrap();

        assert_eq!(config.endpoint, "https://trusted.example.com/api/job/42");
        assert_eq!(config.credential.username(), "alice");
        assert_eq!(config.credential.password(), "p@ss:word");
    }

    #[test]
    fn test_from_lookup_missing_endpoint() {
        let result = TrustedOutputConfig::from_lookup(lookup_from(&[(BASIC_AUTH_ENV_VAR, "a:b")]));
        assert_eq!(result, Err(ConfigError::MissingVariable(ENDPOINT_ENV_VAR)));
    }

    #[test]
    fn test_from_lookup_empty_credential() {
        let result = TrustedOutputConfig::from_lookup(lookup_from(&[
            (ENDPOINT_ENV_VAR, "http://localhost:8080"),
            (BASIC_AUTH_ENV_VAR, ""),
        ]));
        assert_eq!(result, Err(ConfigError::MissingVariable(BASIC_AUTH_ENV_VAR)));
    }

    #[test]
    fn test_from_lookup_missing_endpoint_wins_over_malformed_credential() {
        let result = TrustedOutputConfig::from_lookup(lookup_from(&[(BASIC_AUTH_ENV_VAR, "nocolon")]));
        assert_eq!(result, Err(ConfigError::MissingVariable(ENDPOINT_ENV_VAR)));
    }

    #[test]
    fn test_from_lookup_malformed_credential() {
        let result = TrustedOutputConfig::from_lookup(lookup_from(&[
            (ENDPOINT_ENV_VAR, "http://localhost:8080"),
            (BASIC_AUTH_ENV_VAR, "nocolon"),
        ]));
        assert_eq!(result, Err(ConfigError::MalformedCredential(BASIC_AUTH_ENV_VAR)));
    }

    #[test]
    fn test_upload_url() {
        let cred = BasicAuthCredential::new("u", "p");

        let config = TrustedOutputConfig::new("http://localhost:8080/job/1", cred.clone());
        assert_eq!(config.upload_url(), "http://localhost:8080/job/1/upload");

        let config = TrustedOutputConfig::new("http://localhost:8080/job/1/", cred);
        assert_eq!(config.upload_url(), "http://localhost:8080/job/1/upload");
    }
}
