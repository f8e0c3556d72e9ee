//! Error types for the Steam Web API client

use std::fmt;

/// Errors that can occur when calling the Steam Web API
#[derive(Debug)]
pub enum SteamApiError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// Failed to parse JSON response
    Json(serde_json::Error),
    /// The API answered with a non-success status
    Status(u16),
}

impl fmt::Display for SteamApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "Steam API HTTP error: {}", e),
            Self::Json(e) => write!(f, "Steam API JSON parse error: {}", e),
            Self::Status(code) => write!(f, "Steam API returned status {}", code),
        }
    }
}

impl std::error::Error for SteamApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Status(_) => None,
        }
    }
}

impl From<reqwest::Error> for SteamApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for SteamApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Result type for Steam Web API operations
pub type Result<T> = std::result::Result<T, SteamApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = SteamApiError::Status(403);
        assert_eq!(format!("{}", err), "Steam API returned status 403");
    }

    #[test]
    fn test_json_error_has_source() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = SteamApiError::from(json_err);
        assert!(std::error::Error::source(&err).is_some());
        assert!(format!("{}", err).starts_with("Steam API JSON parse error"));
    }
}
