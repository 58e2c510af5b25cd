//! Browser Helpers
//!
//! Thin wrappers over `window` APIs; each is a no-op when there is no
//! window.

use chrono::Local;

use crate::api::AfterSave;
use crate::config::PAGE_DATA_ID;

/// Blocking notification
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn reload() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

pub fn redirect(href: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(href);
    }
}

/// Carry out the page's post-save step. `StayInPlace` is handled by the
/// caller, which owns the edit tracker.
pub fn apply(after: AfterSave) {
    match after {
        AfterSave::StayInPlace => {}
        AfterSave::ReloadPage => reload(),
        AfterSave::Redirect(href) => redirect(href),
    }
}

/// Current local date as `YYYY-MM-DD`
pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Page origin, e.g. `https://plan.example.com`
pub fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Text of the embedded bootstrap script, if present
pub fn page_data_json() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(PAGE_DATA_ID)?
        .text_content()
}
