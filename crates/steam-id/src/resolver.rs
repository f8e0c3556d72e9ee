use reqwest::Client;
use tracing::{debug, warn};

use crate::parse::{self, normalize};
use crate::types::{ResolveVanityResponse, SteamId64, STEAM64_BASE};

const DEFAULT_API_URL: &str = "https://api.steampowered.com";
const VANITY_PATH: &str = "/ISteamUser/ResolveVanityURL/v0001/";
const VANITY_SUCCESS: i64 = 1;
const STEAM64_LEN: usize = 17;

/// Resolves user-typed queries to 64-bit Steam IDs
///
/// Local shapes are tried first. A single `ResolveVanityURL` request is made
/// only when none of the unambiguous shapes produce an ID, and its failure is
/// never surfaced: resolution moves on to the looser numeric shapes instead.
pub struct SteamIdResolver {
    client: Client,
    api_url: String,
}

impl SteamIdResolver {
    /// Create a resolver against the public Steam Web API
    pub fn new() -> Self {
        Self::with_api_url(DEFAULT_API_URL)
    }

    /// Create a resolver against a custom Web API base URL
    pub fn with_api_url(api_url: &str) -> Self {
        Self::with_client(Client::new(), api_url)
    }

    /// Create a resolver reusing an existing HTTP client
    pub fn with_client(client: Client, api_url: &str) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a query to a Steam64 ID.
    ///
    /// Returns [`SteamId64::UNRESOLVED`] (zero) when nothing matches. A bad
    /// `api_key` only disables the vanity lookup; every other shape still
    /// resolves.
    pub async fn resolve(&self, query: &str, api_key: &str) -> SteamId64 {
        let query = normalize(query);

        if let Some(id) = from_profile_url(&query)
            .or_else(|| from_steam2(&query))
            .or_else(|| from_steam3(&query))
        {
            return id;
        }

        if let Some(id) = self.resolve_vanity(&query, api_key).await {
            return id;
        }

        from_steam64(&query)
            .or_else(|| from_account_id(&query))
            .unwrap_or(SteamId64::UNRESOLVED)
    }

    /// Look up a vanity name through `ISteamUser/ResolveVanityURL`
    async fn resolve_vanity(&self, query: &str, api_key: &str) -> Option<SteamId64> {
        let name = parse::vanity_name(query);
        let url = format!(
            "{}{VANITY_PATH}?key={}&vanityurl={}",
            self.api_url,
            urlencoding::encode(api_key),
            urlencoding::encode(name)
        );

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(vanity = name, error = %e, "Vanity lookup request failed");
                return None;
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(vanity = name, error = %e, "Failed to read vanity lookup body");
                return None;
            }
        };

        let data: ResolveVanityResponse = match serde_json::from_str(&body) {
            Ok(data) => data,
            Err(e) => {
                debug!(vanity = name, status = %status, error = %e, "Failed to parse vanity lookup response");
                return None;
            }
        };

        let result = data.response;
        if result.success != VANITY_SUCCESS {
            debug!(
                vanity = name,
                success = result.success,
                message = result.message.as_deref().unwrap_or(""),
                "Vanity name not resolved"
            );
            return None;
        }
        if result.steamid.len() != STEAM64_LEN {
            debug!(vanity = name, steamid = %result.steamid, "Vanity lookup returned malformed ID");
            return None;
        }

        result.steamid.parse().ok().map(SteamId64)
    }
}

impl Default for SteamIdResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a query with a default resolver against the public Web API
pub async fn resolve_id(query: &str, api_key: &str) -> SteamId64 {
    SteamIdResolver::new().resolve(query, api_key).await
}

fn from_profile_url(query: &str) -> Option<SteamId64> {
    let segment = parse::profile_segment(query)?;
    match segment.parse::<u64>().map(SteamId64) {
        Ok(id) if id.is_valid() => Some(id),
        _ => {
            debug!(segment, "Profile URL does not end in a Steam64 ID");
            None
        }
    }
}

fn from_steam2(query: &str) -> Option<SteamId64> {
    let id = parse::match_steam2(query)?.to_steam64();
    id.is_valid().then_some(id)
}

/// Once the shape matches, the result is final: an `N` too large to pack
/// resolves to zero rather than moving on to the network lookup.
fn from_steam3(query: &str) -> Option<SteamId64> {
    let n = parse::match_steam3_number(query)?;
    Some(
        n.and_then(|n| STEAM64_BASE.checked_add(n))
            .map_or(SteamId64::UNRESOLVED, SteamId64),
    )
}

fn from_steam64(query: &str) -> Option<SteamId64> {
    if !parse::is_steam64_shape(query) {
        return None;
    }
    query.parse().ok().map(SteamId64)
}

fn from_account_id(query: &str) -> Option<SteamId64> {
    parse::match_account_id(query).map(|account| account.to_steam64())
}
