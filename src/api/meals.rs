//! Meals endpoint

use crate::models::MealsSaveRequest;

use super::{AfterSave, ApiClient, SyncError, Transport};

impl<T: Transport> ApiClient<T> {
    /// `POST /meals_save`, then reload to show server-assigned ids
    pub async fn save_meals(&self, request: &MealsSaveRequest) -> Result<AfterSave, SyncError> {
        log::info!("[MEALS] Saving {} meals", request.meals.len());
        self.send_body(reqwest::Method::POST, "/meals_save".to_string(), request).await?;
        Ok(AfterSave::ReloadPage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{client, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_empty_meals_still_posts() {
        let api = client(MockTransport::default().reply(200, "{}"));
        let after = api.save_meals(&MealsSaveRequest { meals: vec![] }).await.unwrap();
        assert_eq!(after, AfterSave::ReloadPage);
        assert_eq!(api.transport().requests()[0].body, Some(json!({ "meals": [] })));
    }

    #[tokio::test]
    async fn test_error_without_message_uses_fallback() {
        let api = client(MockTransport::default().reply(500, "{}"));
        let err = api.save_meals(&MealsSaveRequest { meals: vec![] }).await.unwrap_err();
        assert_eq!(format!("Failed to save meals: {}", err), "Failed to save meals: Unknown error");
    }
}
