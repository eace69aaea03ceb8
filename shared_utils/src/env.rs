use std::str::FromStr;

use thiserror::Error;

/// An environment variable required by the application is not set.
#[derive(Debug, Error)]
#[error("Missing environment variable: {0}")]
pub struct MissingEnvVarError(pub String);

/// An environment variable is set but its value cannot be parsed.
#[derive(Debug, Error)]
#[error("Environment variable {name} has unparseable value '{value}'")]
pub struct EnvVarParseError {
    pub name: String,
    pub value: String,
}

/// Reads an environment variable, returning a structured error if it's missing.
///
/// This is a thin wrapper around `std::env::var` that provides a more
/// ergonomic and specific error type for missing variables.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
pub fn get_env_var(name: &str) -> Result<String, MissingEnvVarError> {
    std::env::var(name).map_err(|_| MissingEnvVarError(name.to_string()))
}

/// Reads an optional environment variable and parses it into `T`.
///
/// Returns `Ok(None)` when the variable is unset, so callers can fall back
/// to a configured default. A set-but-unparseable value is an error rather
/// than a silent fallback.
pub fn get_parsed_env_var<T: FromStr>(name: &str) -> Result<Option<T>, EnvVarParseError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| EnvVarParseError {
                name: name.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_var_is_structured_error() {
        let err = get_env_var("SHARED_UTILS_TEST_DOES_NOT_EXIST").unwrap_err();
        assert!(err.to_string().contains("SHARED_UTILS_TEST_DOES_NOT_EXIST"));
    }

    #[test]
    fn unset_parsed_var_is_none() {
        let got: Option<u32> = get_parsed_env_var("SHARED_UTILS_TEST_UNSET").unwrap();
        assert_eq!(got, None);
    }
}
