//! Meals Panel
//!
//! Editable meal cards plus the "new meal" sub-form.

use crate::api::SyncError;
use crate::models::{MealPayload, MealRecord, MealsSaveRequest};

use super::{EditTracker, RowKey, ViewSwitcher, DEFAULT_MEAL_TYPE};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealRow {
    pub key: RowKey,
    pub id: Option<u32>,
    pub date: String,
    pub meal_type: String,
    pub summary: String,
}

impl MealRow {
    fn is_complete(&self) -> bool {
        !self.date.is_empty() && !self.meal_type.is_empty() && !self.summary.trim().is_empty()
    }

    fn payload(&self) -> MealPayload {
        MealPayload {
            id: self.id,
            date: self.date.clone(),
            meal_type: self.meal_type.clone(),
            summary: self.summary.trim().to_string(),
        }
    }
}

/// One edited field of a meal card
#[derive(Debug, Clone, PartialEq)]
pub enum MealField {
    Date(String),
    Type(String),
    Summary(String),
}

impl MealField {
    pub fn apply(self, row: &mut MealRow) {
        match self {
            MealField::Date(date) => row.date = date,
            MealField::Type(meal_type) => row.meal_type = meal_type,
            MealField::Summary(summary) => row.summary = summary,
        }
    }
}

/// Ordered meal cards
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealList {
    rows: Vec<MealRow>,
    next_key: RowKey,
}

impl MealList {
    pub fn row(&self, key: RowKey) -> Option<&MealRow> {
        self.rows.iter().find(|r| r.key == key)
    }

    pub fn keys(&self) -> Vec<RowKey> {
        self.rows.iter().map(|r| r.key).collect()
    }

    pub fn push(&mut self, id: Option<u32>, date: String, meal_type: String, summary: String) -> RowKey {
        let key = self.next_key;
        self.next_key += 1;
        self.rows.push(MealRow { key, id, date, meal_type, summary });
        key
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Apply `edit` to one row; false if the row is gone.
    pub fn edit(&mut self, key: RowKey, edit: impl FnOnce(&mut MealRow)) -> bool {
        self.rows.iter_mut().find(|r| r.key == key).map(edit).is_some()
    }

    pub fn remove(&mut self, key: RowKey) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.key != key);
        self.rows.len() != before
    }

    /// Payloads of rows with a non-blank summary
    pub fn named_payloads(&self) -> Vec<MealPayload> {
        self.rows
            .iter()
            .filter(|r| !r.summary.trim().is_empty())
            .map(MealRow::payload)
            .collect()
    }

    /// Payloads of rows with date, type and summary all present
    pub fn complete_payloads(&self) -> Vec<MealPayload> {
        self.rows.iter().filter(|r| r.is_complete()).map(MealRow::payload).collect()
    }
}

/// Fields of the new-meal form
#[derive(Debug, Clone, PartialEq)]
pub struct NewMealForm {
    pub date: String,
    pub meal_type: String,
    pub summary: String,
}

impl Default for NewMealForm {
    fn default() -> Self {
        Self { date: String::new(), meal_type: DEFAULT_MEAL_TYPE.to_string(), summary: String::new() }
    }
}

/// Sub-panels of the meals page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MealsView {
    /// "New meal" button shown
    #[default]
    Default,
    /// New-meal form shown above the list
    NewEntry,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealsPanel {
    meals: MealList,
    pub form: NewMealForm,
    view: ViewSwitcher<MealsView>,
    tracker: EditTracker,
}

impl MealsPanel {
    pub fn from_records(records: &[MealRecord]) -> Self {
        let mut panel = Self::default();
        for meal in records {
            panel.meals.push(meal.id, meal.date.clone(), meal.meal_type.clone(), meal.summary.clone());
        }
        panel
    }

    pub fn meals(&self) -> &MealList {
        &self.meals
    }

    pub fn view(&self) -> MealsView {
        self.view.active()
    }

    pub fn is_pending(&self) -> bool {
        self.tracker.is_pending()
    }

    /// Show the new-meal form, pre-filled with `today` and breakfast.
    pub fn open_new_form(&mut self, today: &str) {
        self.view.switch_to(MealsView::NewEntry);
        self.form = NewMealForm { date: today.to_string(), ..NewMealForm::default() };
    }

    /// Hide the new-meal form and clear it.
    pub fn cancel_new_form(&mut self) {
        self.view.switch_to(MealsView::Default);
        self.form = NewMealForm::default();
    }

    pub fn edit_form(&mut self, edit: impl FnOnce(&mut NewMealForm)) {
        edit(&mut self.form);
        self.tracker.mark_dirty();
    }

    pub fn edit_meal(&mut self, key: RowKey, edit: impl FnOnce(&mut MealRow)) {
        if self.meals.edit(key, edit) {
            self.tracker.mark_dirty();
        }
    }

    pub fn delete_meal(&mut self, key: RowKey) {
        if self.meals.remove(key) {
            self.tracker.mark_dirty();
        }
    }

    /// Collect the `/meals_save` body. An open new-meal form must be
    /// completely filled in.
    pub fn to_payload(&self) -> Result<MealsSaveRequest, SyncError> {
        let mut meals = self.meals.named_payloads();

        if self.view.is_visible(MealsView::NewEntry) {
            let form = &self.form;
            let summary = form.summary.trim();
            if form.date.is_empty() || form.meal_type.is_empty() || summary.is_empty() {
                return Err(SyncError::Validation("Please fill in all fields for the new meal.".to_string()));
            }
            meals.push(MealPayload {
                id: None,
                date: form.date.clone(),
                meal_type: form.meal_type.clone(),
                summary: summary.to_string(),
            });
        }

        Ok(MealsSaveRequest { meals })
    }
}
