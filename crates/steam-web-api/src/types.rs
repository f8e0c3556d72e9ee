//! Data types for Steam Web API responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// News item from `ISteamNews/GetNewsForApp`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub gid: String,
    pub title: String,
    pub url: String,
    pub is_external_url: bool,
    pub author: String,
    pub contents: String,
    #[serde(rename = "feedlabel")]
    pub feed_label: String,
    /// Unix timestamp in seconds
    pub date: i64,
    #[serde(rename = "feedname")]
    pub feed_name: String,
}

impl NewsItem {
    /// Publication time, if `date` is a representable timestamp
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date, 0)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetNewsForAppResponse {
    pub(crate) appnews: AppNews,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AppNews {
    #[allow(dead_code)]
    pub(crate) appid: Option<u32>,
    #[serde(default)]
    pub(crate) newsitems: Vec<NewsItem>,
}
