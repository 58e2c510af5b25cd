//! Container State
//!
//! Explicit in-memory model for every editable view. Components only
//! project these structs; all edit rules live here.

mod tracker;
mod switcher;
mod carousel;
mod items;
mod meals;
mod trip;
mod stores;
mod plan;
mod mail;

pub use tracker::EditTracker;
pub use switcher::ViewSwitcher;
pub use carousel::Carousel;
pub use items::{ItemListOwner, CHECK_BUTTON_CLASS};
pub use meals::{MealField, MealRow, MealsPanel, MealsView};
pub use trip::{StoreSelection, TripCard};
pub use stores::StoresTable;
pub use plan::{PlanDraft, PromptView};
pub use mail::{email_card_class, reply_to, ComposeForm, Mailbox, MailView};

/// Local identity of a rendered row, unique within its container
pub type RowKey = u32;

/// Meal type options, in display order
pub const MEAL_TYPES: &[&str] = &["Breakfast", "Hameikatako", "Lunch", "Dinner"];

pub const DEFAULT_MEAL_TYPE: &str = "Breakfast";

/// Parse a list quantity like an integer prefix (`"3 kg"` -> 3).
/// Empty, invalid or zero input falls back to 1.
pub fn parse_quantity(raw: &str) -> i64 {
    let raw = raw.trim();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    match digits[..end].parse::<i64>() {
        Ok(0) | Err(_) => 1,
        Ok(n) => sign * n,
    }
}

/// Parse a plan quantity as a decimal, falling back to 1.
pub fn parse_plan_quantity(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|q| q.is_finite())
        .unwrap_or(1.0)
}
