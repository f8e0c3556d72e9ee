//! Error types for parsing Steam identifiers

use std::fmt;

/// Errors from parsing one of the textual identifier forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdParseError {
    Empty,
    InvalidSteam2(String),
    InvalidSteam3(String),
    InvalidSteam64(String),
    InvalidAccountId(String),
}

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Identifier is empty"),
            Self::InvalidSteam2(s) => write!(f, "Invalid STEAM_0:X:Y identifier: {s}"),
            Self::InvalidSteam3(s) => write!(f, "Invalid [U:1:N] identifier: {s}"),
            Self::InvalidSteam64(s) => write!(f, "Invalid 64-bit Steam ID: {s}"),
            Self::InvalidAccountId(s) => write!(f, "Invalid account ID: {s}"),
        }
    }
}

impl std::error::Error for IdParseError {}

pub type Result<T> = std::result::Result<T, IdParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_display() {
        assert_eq!(format!("{}", IdParseError::Empty), "Identifier is empty");
    }

    #[test]
    fn test_invalid_steam2_display() {
        let err = IdParseError::InvalidSteam2("STEAM_1:2:3".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid STEAM_0:X:Y identifier: STEAM_1:2:3"
        );
    }

    #[test]
    fn test_error_is_debug() {
        let err = IdParseError::InvalidAccountId("x".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("InvalidAccountId"));
    }
}
