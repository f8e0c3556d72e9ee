//! steam-id - resolve Steam account queries from the command line
//!
//! Prints one `<query>\t<steam64>` line per query and exits non-zero if any
//! query could not be resolved.

mod config;
mod error;

use crate::config::{Args, Config};
use crate::error::{CliError, Result};
use clap::Parser;
use steam_id::{classify, normalize, SteamId64, SteamIdResolver};
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Target shared by the library and this binary, which is also named `steam-id`
const LOG_TARGET: &str = "steam_id";

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;

    let config = Config::from_args(&args)?;
    debug!("API URL: {}", config.api_url);
    if config.api_key.is_empty() {
        info!("No STEAM_API_KEY set, vanity names will not resolve");
    }

    let mut client = reqwest::Client::builder();
    if let Some(timeout) = config.timeout {
        client = client.timeout(timeout);
    }
    let resolver = SteamIdResolver::with_client(client.build()?, &config.api_url);

    let mut unresolved = Vec::new();
    for query in &args.queries {
        let id = resolver.resolve(query, &config.api_key).await;
        if id.is_unresolved() {
            unresolved.push(query.clone());
        }
        println!("{}", format_line(query, id, config.all_formats));
    }

    if !unresolved.is_empty() {
        return Err(CliError::Unresolved(unresolved));
    }
    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable
fn init_logging() -> Result<()> {
    let env_filter =
        EnvFilter::from_default_env().add_directive(format!("{LOG_TARGET}=info").parse()?);

    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}

fn format_line(query: &str, id: SteamId64, all_formats: bool) -> String {
    let mut line = format!("{}\t{}", query, id);
    if all_formats {
        let format = classify(&normalize(query)).map_or("-", |f| f.as_str());
        let steam2 = id.to_steam2().map_or_else(|| "-".to_string(), |s| s.to_string());
        let steam3 = id.to_steam3().map_or_else(|| "-".to_string(), |s| s.to_string());
        let account = id.to_account_id().map_or_else(|| "-".to_string(), |a| a.to_string());
        line.push_str(&format!("\t{}\t{}\t{}\t{}", format, steam2, steam3, account));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_target_covers_binary() {
        assert!(module_path!().starts_with(LOG_TARGET));
    }

    #[test]
    fn test_format_line_plain() {
        assert_eq!(
            format_line("gaben", SteamId64(76561197960287930), false),
            "gaben\t76561197960287930"
        );
    }

    #[test]
    fn test_format_line_all_formats() {
        assert_eq!(
            format_line("STEAM_0:0:11101", SteamId64(76561197960287930), true),
            "STEAM_0:0:11101\t76561197960287930\tsteam2\tSTEAM_0:0:11101\t[U:1:22202]\t22202"
        );
    }

    #[test]
    fn test_format_line_unresolved() {
        assert_eq!(
            format_line("", SteamId64::UNRESOLVED, true),
            "\t0\t-\t-\t-\t-"
        );
    }
}
