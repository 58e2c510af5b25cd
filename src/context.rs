//! Application Context
//!
//! Shared settings provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::{ApiClient, HttpTransport};
use crate::config::ClientConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<ClientConfig>,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        Self { config: StoredValue::new(config) }
    }

    /// HTTP client for the configured API base
    pub fn api(&self) -> ApiClient {
        ApiClient::new(HttpTransport::new(self.config.get_value()))
    }
}
