//! Browser HTTP transport
//!
//! reqwest compiles to `fetch` on wasm32. Every request carries the
//! configured timeout so a hung server releases the page's busy state.

use async_trait::async_trait;

use crate::config::{join_url, ClientConfig};

use super::{ApiRequest, ApiResponse, SyncError, Transport};

#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self { client: reqwest::Client::new(), config }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, SyncError> {
        let url = join_url(&self.config.base_url, &request.path);
        log::debug!("[API] {} {}", request.method, url);

        let mut builder = self
            .client
            .request(request.method, url.as_str())
            .timeout(self.config.timeout);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            log::error!("[API] {} failed: {}", url, e);
            SyncError::from(e)
        })?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        log::debug!("[API] {} -> {}", url, status);

        Ok(ApiResponse { status, body })
    }
}
