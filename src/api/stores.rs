//! Stores endpoint

use crate::models::StoresSaveRequest;

use super::{AfterSave, ApiClient, SyncError, Transport};

impl<T: Transport> ApiClient<T> {
    /// `POST /stores_save`, then reload
    pub async fn save_stores(&self, request: &StoresSaveRequest) -> Result<AfterSave, SyncError> {
        log::info!("[STORES] Saving {} stores", request.stores.len());
        self.send_body(reqwest::Method::POST, "/stores_save".to_string(), request).await?;
        Ok(AfterSave::ReloadPage)
    }
}
