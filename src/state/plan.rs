//! Prompt Planner
//!
//! Draft trip built from an AI-generated plan, edited before saving.

use crate::api::SyncError;
use crate::models::{GeneratedPlan, PlanItemPayload, PromptSaveRequest, StoreRecord};

use super::items::{ItemList, ItemListOwner};
use super::meals::MealList;
use super::{parse_plan_quantity, RowKey, StoreSelection, ViewSwitcher};

const UNKNOWN_STORE: &str = "Unknown Store";

/// Panels of the planner page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PromptView {
    #[default]
    Prompt,
    Results,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanDraft {
    pub prompt: String,
    pub date: String,
    pub summary: String,
    pub store: Option<StoreSelection>,
    meals: MealList,
    items: ItemList,
    view: ViewSwitcher<PromptView>,
}

/// Find a catalog store by loose name: exact, or either name containing
/// the other, case-insensitive.
pub fn match_store<'a>(catalog: &'a [StoreRecord], name: &str) -> Option<&'a StoreRecord> {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() || wanted == UNKNOWN_STORE.to_lowercase() {
        return None;
    }
    catalog.iter().find(|store| {
        let candidate = store.name.to_lowercase();
        candidate == wanted || candidate.contains(&wanted) || wanted.contains(&candidate)
    })
}

impl PlanDraft {
    /// Fresh page: trip dated `today`, first catalog store selected.
    pub fn new(today: &str, catalog: &[StoreRecord]) -> Self {
        Self {
            date: today.to_string(),
            store: catalog.first().map(StoreSelection::from),
            ..Self::default()
        }
    }

    pub fn view(&self) -> PromptView {
        self.view.active()
    }

    pub fn meals(&self) -> &MealList {
        &self.meals
    }

    pub fn meals_mut(&mut self) -> &mut MealList {
        &mut self.meals
    }

    pub fn delete_meal(&mut self, key: RowKey) {
        self.meals.remove(key);
    }

    /// The trimmed prompt, or the validation error shown before generating.
    pub fn validated_prompt(&self) -> Result<String, SyncError> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(SyncError::Validation("Please enter a prompt describing your trip.".to_string()));
        }
        Ok(prompt.to_string())
    }

    /// Replace meals and items with a generated plan and show the results.
    pub fn apply_generated(&mut self, plan: GeneratedPlan, prompt: &str, catalog: &[StoreRecord]) {
        self.meals.clear();
        for meal in plan.meals {
            self.meals.push(None, meal.date, meal.meal_type, meal.summary);
        }

        self.items.clear();
        for item in plan.items {
            self.items.push(None, None, item.name, item.quantity.to_string());
        }

        self.summary = prompt.to_string();

        if let Some(store) = plan.store_name.as_deref().and_then(|name| match_store(catalog, name)) {
            log::info!("[PROMPT] Pre-selected store: {}", store.name);
            self.store = Some(StoreSelection::from(store));
        }

        self.view.switch_to(PromptView::Results);
    }

    pub fn select_store(&mut self, catalog: &[StoreRecord], id: u32) {
        if let Some(store) = catalog.iter().find(|s| s.id == id) {
            self.store = Some(StoreSelection::from(store));
        }
    }

    /// Collect the `/prompt_save` body: complete meals and named items.
    pub fn to_payload(&self) -> Result<PromptSaveRequest, SyncError> {
        let meals = self.meals.complete_payloads();
        let items: Vec<PlanItemPayload> = self
            .items
            .rows()
            .iter()
            .filter(|row| !row.name.trim().is_empty())
            .map(|row| PlanItemPayload {
                id: None,
                item_id: None,
                name: row.name.trim().to_string(),
                quantity: parse_plan_quantity(&row.quantity),
            })
            .collect();

        if meals.is_empty() && items.is_empty() {
            return Err(SyncError::Validation("No data to save.".to_string()));
        }

        Ok(PromptSaveRequest {
            meals,
            items,
            date: self.date.clone(),
            summary: self.summary.trim().to_string(),
            store_id: self.store.as_ref().and_then(|s| s.id),
            store_name: self.store.as_ref().map(|s| s.name.clone()),
            store_address: self.store.as_ref().map(|s| s.address.clone()),
        })
    }
}

impl ItemListOwner for PlanDraft {
    fn items(&self) -> &ItemList {
        &self.items
    }

    fn items_mut(&mut self) -> &mut ItemList {
        &mut self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Vec<StoreRecord> {
        vec![
            StoreRecord { id: 1, name: "Corner Market".into(), address: "1 Main St".into() },
            StoreRecord { id: 2, name: "Costco Wholesale".into(), address: "9 Ring Rd".into() },
        ]
    }

    fn generated() -> GeneratedPlan {
        serde_json::from_value(json!({
            "meals": [
                { "date": "2026-10-18", "type": "Dinner", "summary": "Stir fry" },
                { "date": "2026-10-19", "type": "Lunch", "summary": "" }
            ],
            "items": [
                { "name": "Rice", "quantity": 2 },
                { "name": "Peppers", "quantity": 1.5 }
            ],
            "store_name": "costco"
        }))
        .unwrap()
    }

    #[test]
    fn test_match_store() {
        let catalog = catalog();
        assert_eq!(match_store(&catalog, "COSTCO").map(|s| s.id), Some(2));
        assert_eq!(match_store(&catalog, "the corner market downtown").map(|s| s.id), Some(1));
        assert_eq!(match_store(&catalog, "Unknown Store"), None);
        assert_eq!(match_store(&catalog, ""), None);
        assert_eq!(match_store(&catalog, "Farmers"), None);
    }

    #[test]
    fn test_empty_prompt_is_rejected() {
        let mut draft = PlanDraft::new("2026-10-17", &catalog());
        draft.prompt = "   ".into();
        assert_eq!(
            draft.validated_prompt().unwrap_err().to_string(),
            "Please enter a prompt describing your trip."
        );
        draft.prompt = " three days ".into();
        assert_eq!(draft.validated_prompt().unwrap(), "three days");
    }

    #[test]
    fn test_apply_generated_shows_results() {
        let catalog = catalog();
        let mut draft = PlanDraft::new("2026-10-17", &catalog);
        assert_eq!(draft.view(), PromptView::Prompt);
        assert_eq!(draft.store.as_ref().map(|s| s.id), Some(Some(1)));

        draft.apply_generated(generated(), "three days at costco", &catalog);
        assert_eq!(draft.view(), PromptView::Results);
        assert_eq!(draft.summary, "three days at costco");
        assert_eq!(draft.store.as_ref().and_then(|s| s.id), Some(2));
        assert_eq!(draft.meals().keys().len(), 2);
        assert_eq!(draft.items().rows()[1].quantity, "1.5");
    }

    #[test]
    fn test_payload_keeps_complete_meals_and_named_items() {
        let catalog = catalog();
        let mut draft = PlanDraft::new("2026-10-17", &catalog);
        draft.apply_generated(generated(), "three days", &catalog);
        draft.draft_input("Soy sauce".into());
        draft.commit_draft();

        let value = serde_json::to_value(draft.to_payload().unwrap()).unwrap();
        assert_eq!(value["meals"], json!([
            { "id": null, "date": "2026-10-18", "type": "Dinner", "summary": "Stir fry" }
        ]));
        assert_eq!(value["items"][0], json!({ "id": null, "itemId": null, "name": "Rice", "quantity": 2.0 }));
        assert_eq!(value["items"][2]["name"], "Soy sauce");
        assert_eq!(value["date"], "2026-10-17");
        assert_eq!(value["store_name"], "Costco Wholesale");
        assert_eq!(value["store_address"], "9 Ring Rd");
    }

    #[test]
    fn test_nothing_to_save() {
        let draft = PlanDraft::new("2026-10-17", &[]);
        assert_eq!(draft.to_payload().unwrap_err().to_string(), "No data to save.");
    }

    #[test]
    fn test_no_catalog_sends_null_store() {
        let mut draft = PlanDraft::new("2026-10-17", &[]);
        draft.draft_input("Tea".into());
        draft.commit_draft();
        let value = serde_json::to_value(draft.to_payload().unwrap()).unwrap();
        assert_eq!(value["store_id"], json!(null));
        assert_eq!(value["store_name"], json!(null));
    }

    #[test]
    fn test_select_store_by_id() {
        let mut catalog = catalog();
        catalog.push(StoreRecord { id: 5, name: "Corner Market".into(), address: "22 Side St".into() });
        let mut draft = PlanDraft::new("2026-10-17", &catalog);

        draft.select_store(&catalog, 5);
        assert_eq!(draft.store.as_ref().map(|s| s.address.as_str()), Some("22 Side St"));

        draft.select_store(&catalog, 99);
        assert_eq!(draft.store.as_ref().and_then(|s| s.id), Some(5));
    }
}
