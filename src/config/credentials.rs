use std::fmt;

use super::ConfigError;

/// Username and password pair sent with every request.
///
/// Parsed from a `username:password` string by splitting on the first colon,
/// so the password may itself contain colons while the username cannot.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuthCredential {
    username: String,
    password: String,
}

impl BasicAuthCredential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Parse a raw `username:password` value.
    ///
    /// `source` names the variable the value came from and is only used in
    /// the error.
    pub fn parse(raw: &str, source: &'static str) -> Result<Self, ConfigError> {
        let (username, password) = raw
            .split_once(':')
            .ok_or(ConfigError::MalformedCredential(source))?;
        Ok(Self::new(username, password))
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for BasicAuthCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuthCredential")
            .field("username", &self.username)
            .field("password", &"<REDACTED>")
            .finish()
    }
}
