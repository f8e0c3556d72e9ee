use std::time::Duration;

use clap::Parser;

use crate::error::{CliError, Result};

const DEFAULT_API_URL: &str = "https://api.steampowered.com";

/// Resolve Steam IDs, profile URLs and vanity names to 64-bit Steam IDs
#[derive(Debug, Parser)]
#[command(name = "steam-id", version)]
pub struct Args {
    /// Queries to resolve
    #[arg(required = true)]
    pub queries: Vec<String>,

    /// Steam Web API key, needed for vanity names
    #[arg(long, env = "STEAM_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Steam Web API base URL
    #[arg(long, env = "STEAM_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// HTTP timeout in seconds (transport default when unset)
    #[arg(long, env = "STEAM_HTTP_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Also print the STEAM_0, [U:1] and account ID forms
    #[arg(long)]
    pub all_formats: bool,
}

/// Validated settings for a run
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub timeout: Option<Duration>,
    pub all_formats: bool,
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self> {
        let api_url = args.api_url.trim().to_string();
        if api_url.is_empty() {
            return Err(CliError::Config("STEAM_API_URL is empty".to_string()));
        }

        let timeout = match args.timeout_secs {
            Some(0) => {
                return Err(CliError::Config(
                    "STEAM_HTTP_TIMEOUT_SECS must be positive".to_string(),
                ))
            }
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        Ok(Self {
            api_key: args.api_key.clone(),
            api_url,
            timeout,
            all_formats: args.all_formats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["steam-id", "--api-key", "k", "--api-url", "http://localhost:1"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_from_args() {
        let config = Config::from_args(&args(&["--timeout-secs", "5", "gaben"])).unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.api_url, "http://localhost:1");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert!(!config.all_formats);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = Config::from_args(&args(&["--timeout-secs", "0", "gaben"]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_queries_required() {
        let argv = ["steam-id", "--api-key", "k", "--api-url", "http://localhost:1"];
        assert!(Args::try_parse_from(argv).is_err());
    }
}
