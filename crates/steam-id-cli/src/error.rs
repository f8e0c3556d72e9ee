//! Error types for the steam-id command

use std::fmt;

#[derive(Debug)]
pub enum CliError {
    /// Configuration error
    Config(String),
    /// One or more queries did not resolve
    Unresolved(Vec<String>),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::Unresolved(queries) => {
                write!(f, "Could not resolve: {}", queries.join(", "))
            }
        }
    }
}

impl std::error::Error for CliError {}

impl From<tracing_subscriber::filter::ParseError> for CliError {
    fn from(e: tracing_subscriber::filter::ParseError) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        Self::Config(format!("HTTP client: {}", e))
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_display() {
        let err = CliError::Unresolved(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(format!("{}", err), "Could not resolve: a, b");
    }

    #[test]
    fn test_config_display() {
        let err = CliError::Config("STEAM_API_URL is empty".to_string());
        assert_eq!(
            format!("{}", err),
            "Configuration error: STEAM_API_URL is empty"
        );
    }
}
