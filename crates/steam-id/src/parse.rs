//! Query normalization and shape matching
//!
//! Recognizes the textual shapes a Steam account identifier is typed in:
//! profile URLs, `STEAM_0:X:Y`, `[U:1:N]`, vanity URLs, bare 64-bit IDs and
//! bare 32-bit account numbers.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::{AccountId, SteamId2, SteamId3};

pub(crate) const PROFILE_MARKER: &str = "steamcommunity.com/profiles/";
pub(crate) const VANITY_MARKER: &str = "steamcommunity.com/id/";

/// Smallest and largest values accepted as a bare account number
pub(crate) const ACCOUNT_ID_RANGE: std::ops::RangeInclusive<u64> = 2..=4_294_967_295;

static STEAM2_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^STEAM_0:(0|1):([0-9][0-9]{0,8})$").unwrap());

static STEAM3_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[?U:1:([0-9]+)\]?").unwrap());

static STEAM3_EXACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\[?U:1:([0-9]+)\]?$").unwrap());

static STEAM64_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{17}$").unwrap());

/// Shape of a normalized query, in resolution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdFormat {
    /// `steamcommunity.com/profiles/<id>`
    ProfileUrl,
    /// `STEAM_0:X:Y`
    Steam2,
    /// `[U:1:N]`
    Steam3,
    /// `steamcommunity.com/id/<name>` or a bare name
    Vanity,
    /// 17 decimal digits
    Steam64,
    /// Decimal number in `2..=4294967295`
    AccountId,
}

impl IdFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProfileUrl => "profile_url",
            Self::Steam2 => "steam2",
            Self::Steam3 => "steam3",
            Self::Vanity => "vanity",
            Self::Steam64 => "steam64",
            Self::AccountId => "account_id",
        }
    }
}

/// Strip all whitespace and surrounding slashes from a raw query
pub fn normalize(query: &str) -> String {
    let compact: String = query.chars().filter(|c| !c.is_whitespace()).collect();
    compact.trim_matches('/').to_string()
}

/// Classify a normalized query by the first local shape it matches.
///
/// A query that is a vanity name by elimination is only reported as
/// `Vanity` when no numeric shape applies; the resolver still tries the
/// network lookup before the numeric shapes.
pub fn classify(query: &str) -> Option<IdFormat> {
    if query.is_empty() {
        return None;
    }
    if profile_segment(query).is_some() {
        return Some(IdFormat::ProfileUrl);
    }
    if match_steam2(query).is_some() {
        return Some(IdFormat::Steam2);
    }
    if match_steam3(query).is_some() {
        return Some(IdFormat::Steam3);
    }
    if query.contains(VANITY_MARKER) {
        return Some(IdFormat::Vanity);
    }
    if is_steam64_shape(query) {
        return Some(IdFormat::Steam64);
    }
    if match_account_id(query).is_some() {
        return Some(IdFormat::AccountId);
    }
    Some(IdFormat::Vanity)
}

/// Everything after the first profile marker, if present
pub(crate) fn profile_segment(query: &str) -> Option<&str> {
    query
        .find(PROFILE_MARKER)
        .map(|idx| &query[idx + PROFILE_MARKER.len()..])
}

/// Everything after the first vanity marker, or the whole query
pub(crate) fn vanity_name(query: &str) -> &str {
    match query.find(VANITY_MARKER) {
        Some(idx) => &query[idx + VANITY_MARKER.len()..],
        None => query,
    }
}

pub(crate) fn match_steam2(query: &str) -> Option<SteamId2> {
    let caps = STEAM2_RE.captures(query)?;
    let auth_server = caps[1].parse().ok()?;
    let account_number = caps[2].parse().ok()?;
    SteamId2::new(auth_server, account_number)
}

/// Finds a `U:1:N` anywhere in the query, ignoring case
pub(crate) fn match_steam3(query: &str) -> Option<SteamId3> {
    let caps = STEAM3_RE.captures(query)?;
    caps[1].parse().ok().map(SteamId3::new)
}

/// The `N` of a `U:1:N` found anywhere in the query, as a full 64-bit value.
///
/// `Some(None)` means the shape matched but `N` does not fit in a `u64`.
pub(crate) fn match_steam3_number(query: &str) -> Option<Option<u64>> {
    let caps = STEAM3_RE.captures(query)?;
    Some(caps[1].parse().ok())
}

pub(crate) fn match_steam3_exact(query: &str) -> Option<SteamId3> {
    let caps = STEAM3_EXACT_RE.captures(query)?;
    caps[1].parse().ok().map(SteamId3::new)
}

pub(crate) fn is_steam64_shape(query: &str) -> bool {
    STEAM64_RE.is_match(query)
}

pub(crate) fn match_account_id(query: &str) -> Option<AccountId> {
    let n = query.parse::<u64>().ok()?;
    if !ACCOUNT_ID_RANGE.contains(&n) {
        return None;
    }
    u32::try_from(n).ok().map(AccountId)
}
