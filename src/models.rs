//! Frontend Models
//!
//! Data structures matching the server's JSON contracts: records the page
//! is rendered from, and request/response bodies of the save endpoints.

use serde::{Deserialize, Deserializer, Serialize};

// ========================
// Render Records
// ========================

/// A store from the catalog (also a row of the stores table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    pub id: u32,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
}

/// A line of a trip's shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItemRecord {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub item_id: Option<u32>,
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

/// A shopping trip with its list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default)]
    pub store_id: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub store_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub store_address: String,
    #[serde(default)]
    pub items: Vec<ListItemRecord>,
}

/// A planned meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(rename = "type", default = "default_meal_type")]
    pub meal_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_quantity() -> i64 {
    1
}

fn default_meal_type() -> String {
    crate::state::DEFAULT_MEAL_TYPE.to_string()
}

// ========================
// Trip Planner Payloads
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItemPayload {
    pub id: Option<u32>,
    #[serde(rename = "itemId")]
    pub item_id: Option<u32>,
    pub name: String,
    pub quantity: i64,
}

/// Body of `POST /lists_save`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListSaveRequest {
    pub trip_id: u32,
    pub summary: String,
    pub store_id: Option<u32>,
    pub date: String,
    pub store_name: String,
    pub store_address: String,
    pub items: Vec<ListItemPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealPayload {
    pub id: Option<u32>,
    pub date: String,
    #[serde(rename = "type")]
    pub meal_type: String,
    pub summary: String,
}

/// Body of `POST /meals_save`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealsSaveRequest {
    pub meals: Vec<MealPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorePayload {
    pub id: Option<u32>,
    pub name: String,
    pub address: String,
}

/// Body of `POST /stores_save`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoresSaveRequest {
    pub stores: Vec<StorePayload>,
}

/// Body of `POST /prompt_generate`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedMeal {
    #[serde(default)]
    pub date: String,
    #[serde(rename = "type", default = "default_meal_type")]
    pub meal_type: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedItem {
    pub name: String,
    #[serde(default = "default_plan_quantity")]
    pub quantity: f64,
}

fn default_plan_quantity() -> f64 {
    1.0
}

/// Response of `POST /prompt_generate`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedPlan {
    #[serde(default)]
    pub meals: Vec<GeneratedMeal>,
    #[serde(default)]
    pub items: Vec<GeneratedItem>,
    #[serde(default)]
    pub store_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanItemPayload {
    pub id: Option<u32>,
    #[serde(rename = "itemId")]
    pub item_id: Option<u32>,
    pub name: String,
    pub quantity: f64,
}

/// Body of `POST /prompt_save`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptSaveRequest {
    pub meals: Vec<MealPayload>,
    pub items: Vec<PlanItemPayload>,
    pub date: String,
    pub summary: String,
    pub store_id: Option<u32>,
    pub store_name: Option<String>,
    pub store_address: Option<String>,
}

// ========================
// Mail
// ========================

/// Email as returned by `GET /emails/...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Email {
    pub id: u32,
    pub sender: String,
    #[serde(default)]
    pub recipients: Vec<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub archived: bool,
}

/// Partial update sent with `PUT /emails/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmailUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

/// Body of `POST /emails`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComposeRequest {
    pub recipients: String,
    pub subject: String,
    pub body: String,
}

/// Response of `POST /emails`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SendResult {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Error body returned with a non-success status
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
