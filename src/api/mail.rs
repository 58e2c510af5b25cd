//! Mail endpoints

use reqwest::Method;

use crate::models::{ComposeRequest, Email, EmailUpdate, SendResult};
use crate::state::Mailbox;

use super::{ApiClient, SyncError, Transport};

impl<T: Transport> ApiClient<T> {
    /// `GET /emails/{mailbox}`
    pub async fn list_mailbox(&self, mailbox: Mailbox) -> Result<Vec<Email>, SyncError> {
        self.get_json(format!("/emails/{}", mailbox.as_str())).await
    }

    /// `GET /emails/{id}`
    pub async fn get_email(&self, id: u32) -> Result<Email, SyncError> {
        self.get_json(format!("/emails/{}", id)).await
    }

    /// `PUT /emails/{id}` with a partial update
    pub async fn update_email(&self, id: u32, update: &EmailUpdate) -> Result<(), SyncError> {
        self.send_body(Method::PUT, format!("/emails/{}", id), update).await
    }

    pub async fn set_archived(&self, id: u32, archived: bool) -> Result<(), SyncError> {
        self.update_email(id, &EmailUpdate { archived: Some(archived), ..Default::default() }).await
    }

    /// `PUT /emails/{id}` with `{"read": true}`. Nothing waits on this, so
    /// a failure is only logged.
    pub async fn mark_read(&self, id: u32) {
        let mark = EmailUpdate { read: Some(true), ..Default::default() };
        if let Err(e) = self.update_email(id, &mark).await {
            log::warn!("[MAIL] Could not mark email {} as read: {}", id, e);
        }
    }

    /// `POST /emails`. An `error` field fails the call even on success
    /// status; otherwise returns the server's message.
    pub async fn send_email(&self, request: &ComposeRequest) -> Result<String, SyncError> {
        let result: SendResult = self.post_json("/emails", request).await?;
        match result.error {
            Some(error) => Err(SyncError::Server(error)),
            None => Ok(result.message.unwrap_or_default()),
        }
    }
}
