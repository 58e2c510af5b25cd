//! Prompt planner endpoints

use crate::models::{GenerateRequest, GeneratedPlan, PromptSaveRequest};

use super::{AfterSave, ApiClient, SyncError, Transport};

impl<T: Transport> ApiClient<T> {
    /// `POST /prompt_generate`
    pub async fn generate_plan(&self, prompt: &str) -> Result<GeneratedPlan, SyncError> {
        let plan: GeneratedPlan = self
            .post_json("/prompt_generate", &GenerateRequest { prompt: prompt.to_string() })
            .await?;
        log::info!("[PROMPT] Generated {} meals, {} items", plan.meals.len(), plan.items.len());
        Ok(plan)
    }

    /// `POST /prompt_save`, then go home
    pub async fn save_plan(&self, request: &PromptSaveRequest) -> Result<AfterSave, SyncError> {
        log::info!("[PROMPT] Saving {} meals, {} items", request.meals.len(), request.items.len());
        self.send_body(reqwest::Method::POST, "/prompt_save".to_string(), request).await?;
        Ok(AfterSave::Redirect("/"))
    }
}
