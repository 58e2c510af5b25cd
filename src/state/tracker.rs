//! Edit-Pending tracking for one container.

/// Tracks whether a container has unsaved edits.
///
/// The flag drives the visibility of the container's save button. Once
/// raised it stays up until `mark_saved` is called after a confirmed save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditTracker {
    pending: bool,
}

impl EditTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edit. Returns true if this edit revealed the save button.
    pub fn mark_dirty(&mut self) -> bool {
        let revealed = !self.pending;
        self.pending = true;
        revealed
    }

    /// Clear the flag after the server confirmed a save.
    pub fn mark_saved(&mut self) {
        self.pending = false;
    }

    /// Hide the save button without a save. Only the list container's
    /// new-item input uses this, when it is cleared on an empty list.
    pub fn withdraw(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
