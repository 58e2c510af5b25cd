//! Page State Stores
//!
//! Uses Leptos reactive_stores for the mail page, plus the busy guard
//! shared by long-running actions.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Email;
use crate::state::{ComposeForm, MailView};

/// Mail page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct MailState {
    /// Which panel is shown
    pub view: MailView,
    /// Cards of the listed mailbox
    pub emails: Vec<Email>,
    /// Email being read; `None` while it loads
    pub open_email: Option<Email>,
    pub compose: ComposeForm,
}

/// Type alias for the store
pub type MailStore = Store<MailState>;

/// Get the mail store from context
pub fn use_mail_store() -> MailStore {
    expect_context::<MailStore>()
}

/// Holds a busy flag for as long as it lives.
///
/// `acquire` refuses while the flag is already set, so a second trigger
/// during a request is ignored. Dropping the guard clears the flag on
/// every path out of the action.
pub struct BusyGuard {
    busy: RwSignal<bool>,
}

impl BusyGuard {
    pub fn acquire(busy: RwSignal<bool>) -> Option<Self> {
        if busy.get_untracked() {
            return None;
        }
        busy.set(true);
        Some(Self { busy })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_guard_blocks_second_trigger() {
        let busy = RwSignal::new(false);
        {
            let _guard = BusyGuard::acquire(busy).unwrap();
            assert!(busy.get_untracked());
            assert!(BusyGuard::acquire(busy).is_none());
        }
        assert!(!busy.get_untracked());
    }

    #[test]
    fn test_busy_guard_released_on_early_return() {
        fn action(busy: RwSignal<bool>, fail: bool) -> Result<(), &'static str> {
            let _guard = BusyGuard::acquire(busy).ok_or("busy")?;
            if fail {
                return Err("failed");
            }
            Ok(())
        }

        let busy = RwSignal::new(false);
        assert_eq!(action(busy, true), Err("failed"));
        assert!(!busy.get_untracked());
        assert_eq!(action(busy, false), Ok(()));
        assert!(!busy.get_untracked());
    }

    #[test]
    fn test_mail_state_defaults_to_inbox() {
        let state = MailState::default();
        assert_eq!(state.view, MailView::default());
        assert!(state.open_email.is_none());
        assert_eq!(state.compose, ComposeForm::default());
    }
}
