//! Sync Client
//!
//! Typed wrappers around the server's JSON endpoints, organized by page.
//! Every call goes through a [`Transport`] so the decoding rules can be
//! exercised without a browser.

mod error;
mod http;
mod mail;
mod lists;
mod meals;
mod stores;
mod prompt;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::ErrorBody;

pub use error::{SyncError, UNKNOWN_ERROR};
pub use http::HttpTransport;

/// One outgoing request; `path` is relative to the API base
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

/// Raw response before decoding
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Carries requests to the server. Futures are not `Send`: the browser
/// runs everything on one thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, SyncError>;
}

/// What a page does once the server confirmed a save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterSave {
    /// Clear the container's Edit-Pending flag and stay
    StayInPlace,
    /// Reload the whole page
    ReloadPage,
    /// Navigate away
    Redirect(&'static str),
}

#[derive(Clone)]
pub struct ApiClient<T = HttpTransport> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call(&self, method: Method, path: String, body: Option<serde_json::Value>) -> Result<ApiResponse, SyncError> {
        let response = self.transport.send(ApiRequest { method, path, body }).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(server_error(&response))
        }
    }

    async fn get_json<R: DeserializeOwned>(&self, path: String) -> Result<R, SyncError> {
        let response = self.call(Method::GET, path, None).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    async fn post_json<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, SyncError> {
        let body = serde_json::to_value(body)?;
        let response = self.call(Method::POST, path.to_string(), Some(body)).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Send a body where only the status matters
    async fn send_body<B: Serialize>(&self, method: Method, path: String, body: &B) -> Result<(), SyncError> {
        let body = serde_json::to_value(body)?;
        self.call(method, path, Some(body)).await.map(|_| ())
    }
}

/// Decode a non-success response into the server's message, falling back
/// to a generic one.
pub fn server_error(response: &ApiResponse) -> SyncError {
    match serde_json::from_str::<ErrorBody>(&response.body) {
        Ok(body) => SyncError::Server(body.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string())),
        Err(_) => SyncError::Server(format!("HTTP {}", response.status)),
    }
}
