//! Steam Web API HTTP client

use crate::error::{Result, SteamApiError};
use crate::types::{GetNewsForAppResponse, NewsItem};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Client for the Steam Web API
///
/// Every request is authenticated with the key the client was built with.
/// Endpoints follow the `/{interface}/{method}/v{version}/` layout.
pub struct SteamApiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SteamApiClient {
    /// Base URL of the public Steam Web API
    pub const BASE_URL: &'static str = "https://api.steampowered.com";

    /// Create a client for the public Web API
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, Self::BASE_URL)
    }

    /// Create a client against a custom base URL
    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self::with_http_client(reqwest::Client::new(), api_key, base_url)
    }

    /// Create a client against a custom base URL with a request timeout
    pub fn with_timeout(api_key: &str, base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_http_client(http, api_key, base_url))
    }

    /// Create a client reusing an existing HTTP client
    pub fn with_http_client(http: reqwest::Client, api_key: &str, base_url: &str) -> Self {
        Self {
            http,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Call an arbitrary Web API method and decode the JSON body
    ///
    /// # Arguments
    /// * `interface` - Interface name, e.g. `ISteamNews`
    /// * `method` - Method name, e.g. `GetNewsForApp`
    /// * `version` - Method version, rendered as `v0002`
    /// * `params` - Extra query parameters; `key` and `format` are added
    pub async fn request<T: DeserializeOwned>(
        &self,
        interface: &str,
        method: &str,
        version: u32,
        params: &[(&str, String)],
    ) -> Result<T> {
        let mut url = format!(
            "{}/{}/{}/v{:04}/?key={}&format=json",
            self.base_url,
            interface,
            method,
            version,
            urlencoding::encode(&self.api_key)
        );
        for (name, value) in params {
            url.push_str(&format!(
                "&{}={}",
                urlencoding::encode(name),
                urlencoding::encode(value)
            ));
        }

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!(interface, method, status = %status, "Steam API request failed");
            return Err(SteamApiError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Get the latest news for an app
    ///
    /// # Arguments
    /// * `app_id` - Steam AppID of the game
    /// * `count` - Maximum number of news items
    /// * `max_length` - Truncate contents to this many characters (0 for full text)
    pub async fn get_news_for_app(
        &self,
        app_id: u32,
        count: u32,
        max_length: u32,
    ) -> Result<Vec<NewsItem>> {
        let params = [
            ("appid", app_id.to_string()),
            ("count", count.to_string()),
            ("maxlength", max_length.to_string()),
        ];
        let data: GetNewsForAppResponse = self
            .request("ISteamNews", "GetNewsForApp", 2, &params)
            .await?;
        Ok(data.appnews.newsitems)
    }
}
