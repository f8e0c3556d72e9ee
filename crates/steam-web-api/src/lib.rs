//! Rust client for the Steam Web API
//!
//! Provides a generic request function for any `/{interface}/{method}/v{version}/`
//! endpoint plus typed wrappers for the endpoints this workspace uses.
//!
//! # Example
//!
//! ```no_run
//! use steam_web_api::SteamApiClient;
//!
//! # async fn example() -> Result<(), steam_web_api::SteamApiError> {
//! let client = SteamApiClient::new("API_KEY");
//!
//! for item in client.get_news_for_app(440, 5, 300).await? {
//!     println!("{} ({:?})", item.title, item.published_at());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - `GET /ISteamNews/GetNewsForApp/v0002` - Latest news for an app

mod client;
mod error;
mod types;

pub use client::SteamApiClient;
pub use error::{Result, SteamApiError};
pub use types::NewsItem;
