use super::ConfigError;

/// Read a variable from the real process environment.
///
/// Values that are not valid unicode are treated as absent.
pub fn process_env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Fetch a required variable through `lookup`.
///
/// Missing and empty values are both rejected with
/// [`ConfigError::MissingVariable`]. Whitespace is not trimmed; a value of
/// `" "` is passed through as-is.
pub fn require_var<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVariable(name)),
    }
}
