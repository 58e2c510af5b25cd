//! Shopping list endpoint

use crate::models::ListSaveRequest;

use super::{AfterSave, ApiClient, SyncError, Transport};

impl<T: Transport> ApiClient<T> {
    /// `POST /lists_save`. The trip card stays on screen and only hides its
    /// save button.
    pub async fn save_list(&self, request: &ListSaveRequest) -> Result<AfterSave, SyncError> {
        log::info!("[LISTS] Sending list for trip {} ({} items)", request.trip_id, request.items.len());
        self.send_body(reqwest::Method::POST, "/lists_save".to_string(), request).await?;
        Ok(AfterSave::StayInPlace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{client, MockTransport};
    use crate::models::ListItemPayload;
    use serde_json::json;

    fn request(items: Vec<ListItemPayload>) -> ListSaveRequest {
        ListSaveRequest {
            trip_id: 3,
            summary: "Weekend".into(),
            store_id: Some(1),
            date: "2026-10-17".into(),
            store_name: "Corner Market".into(),
            store_address: "1 Main St".into(),
            items,
        }
    }

    #[tokio::test]
    async fn test_save_list_stays_in_place() {
        let api = client(MockTransport::default().reply(200, r#"{"success": true}"#));
        let after = api.save_list(&request(vec![])).await.unwrap();
        assert_eq!(after, AfterSave::StayInPlace);

        let sent = &api.transport().requests()[0];
        assert_eq!(sent.path, "/lists_save");
        assert_eq!(sent.body.as_ref().unwrap()["items"], json!([]));
    }

    #[tokio::test]
    async fn test_save_list_surfaces_server_error() {
        let api = client(MockTransport::default().reply(500, r#"{"error": "database is locked"}"#));
        let err = api.save_list(&request(vec![])).await.unwrap_err();
        assert_eq!(format!("Failed to save list because {}", err), "Failed to save list because database is locked");
    }

    #[tokio::test]
    async fn test_save_list_surfaces_transport_error() {
        let api = client(MockTransport::default().fail("Failed to fetch"));
        let err = api.save_list(&request(vec![])).await.unwrap_err();
        assert_eq!(err, SyncError::Transport("Failed to fetch".into()));
    }
}
