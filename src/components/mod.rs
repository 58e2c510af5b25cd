//! UI Components
//!
//! Leptos views over the container state in `crate::state`.

mod item_table;
mod store_select;
mod meal_card;
mod trip_board;
mod meals_page;
mod stores_page;
mod prompt_planner;
mod mail_page;

pub use item_table::ItemTable;
pub use store_select::StoreSelect;
pub use meal_card::{MealCard, MealTypeSelect};
pub use trip_board::TripBoard;
pub use meals_page::MealsPage;
pub use stores_page::StoresPage;
pub use prompt_planner::PromptPlanner;
pub use mail_page::MailPage;
