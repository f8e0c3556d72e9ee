//! Steam account identifiers
//!
//! Converts between the 64-bit, `STEAM_0:X:Y`, `[U:1:N]` and 32-bit account
//! forms, and resolves free-form queries (IDs, profile URLs, vanity names) to
//! a 64-bit ID. Vanity names are looked up through the Steam Web API.
//!
//! ```no_run
//! use steam_id::SteamIdResolver;
//!
//! # async fn example() {
//! let resolver = SteamIdResolver::new();
//! let id = resolver.resolve("https://steamcommunity.com/id/gabelogannewell", "API_KEY").await;
//! if id.is_unresolved() {
//!     println!("no such account");
//! }
//! # }
//! ```

mod error;
mod parse;
mod resolver;
mod types;

pub use error::{IdParseError, Result};
pub use parse::{classify, normalize, IdFormat};
pub use resolver::{resolve_id, SteamIdResolver};
pub use types::{AccountId, SteamId2, SteamId3, SteamId64, STEAM64_BASE};
