//! Page Bootstrap
//!
//! The server template embeds the page's initial data and client settings
//! as JSON in `<script id="page-data" type="application/json">`.

use std::time::Duration;

use serde::Deserialize;

use crate::models::{MealRecord, StoreRecord, TripRecord};

/// Element id of the embedded bootstrap JSON
pub const PAGE_DATA_ID: &str = "page-data";

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Which view to mount, with its initial data
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum PageData {
    Lists {
        #[serde(default)]
        trips: Vec<TripRecord>,
        #[serde(default)]
        stores: Vec<StoreRecord>,
    },
    Meals {
        #[serde(default)]
        meals: Vec<MealRecord>,
    },
    Stores {
        #[serde(default)]
        stores: Vec<StoreRecord>,
    },
    Prompt {
        #[serde(default)]
        stores: Vec<StoreRecord>,
    },
    Mail,
}

/// Client settings as written by the template
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClientSettings {
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Bootstrap {
    pub page: PageData,
    #[serde(default)]
    pub client: ClientSettings,
}

impl Bootstrap {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Resolved settings for the HTTP transport
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// `origin` is the page origin, used when no `api_base` is given.
    pub fn resolve(settings: &ClientSettings, origin: &str) -> Self {
        let base_url = settings
            .api_base
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or(origin)
            .to_string();
        let timeout_ms = settings.timeout_ms.filter(|ms| *ms > 0).unwrap_or(DEFAULT_TIMEOUT_MS);
        Self { base_url, timeout: Duration::from_millis(timeout_ms) }
    }
}

/// Join an API base and an absolute path without doubling slashes
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lists_page() {
        let boot = Bootstrap::parse(r#"{
            "page": {
                "view": "lists",
                "trips": [{ "id": 1, "date": "2026-10-17", "items": [{ "name": "Milk" }] }],
                "stores": [{ "id": 2, "name": "Corner Market", "address": "1 Main St" }]
            },
            "client": { "timeout_ms": 5000, "log_level": "debug" }
        }"#)
        .unwrap();

        match boot.page {
            PageData::Lists { trips, stores } => {
                assert_eq!(trips[0].items[0].item_id, None);
                assert_eq!(stores[0].name, "Corner Market");
            }
            other => panic!("unexpected page {:?}", other),
        }
        assert_eq!(boot.client.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_parse_mail_page_without_client() {
        let boot = Bootstrap::parse(r#"{ "page": { "view": "mail" } }"#).unwrap();
        assert_eq!(boot.page, PageData::Mail);
        assert_eq!(boot.client, ClientSettings::default());
    }

    #[test]
    fn test_unknown_view_is_an_error() {
        assert!(Bootstrap::parse(r#"{ "page": { "view": "calendar" } }"#).is_err());
    }

    #[test]
    fn test_resolve_defaults_to_origin() {
        let config = ClientConfig::resolve(&ClientSettings::default(), "https://plan.example.com");
        assert_eq!(config.base_url, "https://plan.example.com");
        assert_eq!(config.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));

        let settings = ClientSettings { api_base: Some("  ".into()), timeout_ms: Some(0), log_level: None };
        let config = ClientConfig::resolve(&settings, "http://localhost:5000");
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
    }

    #[test]
    fn test_resolve_overrides() {
        let settings = ClientSettings {
            api_base: Some("https://api.example.com/v1/".into()),
            timeout_ms: Some(1500),
            log_level: None,
        };
        let config = ClientConfig::resolve(&settings, "https://plan.example.com");
        assert_eq!(config.base_url, "https://api.example.com/v1/");
        assert_eq!(config.timeout, Duration::from_millis(1500));
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://a.example/", "/emails/inbox"), "https://a.example/emails/inbox");
        assert_eq!(join_url("https://a.example", "lists_save"), "https://a.example/lists_save");
    }
}
