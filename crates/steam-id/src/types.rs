use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{IdParseError, Result};
use crate::parse;

/// Steam64 of account 0 in the public universe: universe 1, type 1
/// (individual), instance 1.
pub const STEAM64_BASE: u64 = 76_561_197_960_265_728;

const MIN_17_DIGITS: u64 = 10_000_000_000_000_000;
const MAX_17_DIGITS: u64 = 99_999_999_999_999_999;

/// Canonical 64-bit Steam account identifier.
///
/// `SteamId64(0)` is the "unresolved" value returned by the resolver and is
/// never a real account.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SteamId64(pub u64);

impl SteamId64 {
    pub const UNRESOLVED: SteamId64 = SteamId64(0);

    pub fn as_u64(self) -> u64 {
        self.0
    }

    pub fn is_unresolved(self) -> bool {
        self.0 == 0
    }

    /// Whether the value renders as exactly 17 decimal digits, which every
    /// individual account in the public universe does.
    pub fn is_valid(self) -> bool {
        (MIN_17_DIGITS..=MAX_17_DIGITS).contains(&self.0)
    }

    /// The 32-bit account number, if this ID lies in the individual-account range
    pub fn to_account_id(self) -> Option<AccountId> {
        let offset = self.0.checked_sub(STEAM64_BASE)?;
        u32::try_from(offset).ok().map(AccountId)
    }

    pub fn to_steam2(self) -> Option<SteamId2> {
        self.to_account_id().map(AccountId::to_steam2)
    }

    pub fn to_steam3(self) -> Option<SteamId3> {
        self.to_account_id().map(SteamId3)
    }
}

impl fmt::Display for SteamId64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SteamId64 {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(IdParseError::Empty);
        }
        s.parse::<u64>()
            .ok()
            .map(SteamId64)
            .filter(|id| id.is_valid())
            .ok_or_else(|| IdParseError::InvalidSteam64(s.to_string()))
    }
}

impl From<SteamId64> for u64 {
    fn from(id: SteamId64) -> Self {
        id.0
    }
}

/// 32-bit account number shared by all three encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub u32);

impl AccountId {
    pub fn to_steam64(self) -> SteamId64 {
        SteamId64(STEAM64_BASE + u64::from(self.0))
    }

    pub fn to_steam2(self) -> SteamId2 {
        SteamId2 {
            auth_server: (self.0 & 1) as u8,
            account_number: self.0 >> 1,
        }
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(IdParseError::Empty);
        }
        s.parse::<u32>()
            .map(AccountId)
            .map_err(|_| IdParseError::InvalidAccountId(s.to_string()))
    }
}

/// Legacy `STEAM_0:X:Y` form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SteamId2 {
    /// `X`, the low bit of the account ID (0 or 1)
    pub auth_server: u8,
    /// `Y`, the account ID shifted right by one
    pub account_number: u32,
}

impl SteamId2 {
    /// Returns `None` when `auth_server` is not 0 or 1.
    pub fn new(auth_server: u8, account_number: u32) -> Option<Self> {
        (auth_server <= 1).then_some(Self {
            auth_server,
            account_number,
        })
    }

    pub fn to_steam64(self) -> SteamId64 {
        SteamId64(STEAM64_BASE + u64::from(self.account_number) * 2 + u64::from(self.auth_server))
    }
}

impl fmt::Display for SteamId2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "STEAM_0:{}:{}", self.auth_server, self.account_number)
    }
}

impl FromStr for SteamId2 {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(IdParseError::Empty);
        }
        parse::match_steam2(s).ok_or_else(|| IdParseError::InvalidSteam2(s.to_string()))
    }
}

/// Modern `[U:1:N]` form, where `N` is the account ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SteamId3(pub AccountId);

impl SteamId3 {
    pub fn new(account_id: u32) -> Self {
        Self(AccountId(account_id))
    }

    pub fn account_id(self) -> AccountId {
        self.0
    }

    pub fn to_steam64(self) -> SteamId64 {
        self.0.to_steam64()
    }
}

impl fmt::Display for SteamId3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[U:1:{}]", self.0)
    }
}

impl FromStr for SteamId3 {
    type Err = IdParseError;

    /// Accepts `[U:1:N]` or `U:1:N`, in any letter case.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(IdParseError::Empty);
        }
        parse::match_steam3_exact(s).ok_or_else(|| IdParseError::InvalidSteam3(s.to_string()))
    }
}

/// Body of `ISteamUser/ResolveVanityURL`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ResolveVanityResponse {
    #[serde(default)]
    pub(crate) response: VanityResult,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct VanityResult {
    #[serde(default)]
    pub(crate) steamid: String,
    #[serde(default)]
    pub(crate) success: i64,
    pub(crate) message: Option<String>,
}
