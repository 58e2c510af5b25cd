//! View Switcher
//!
//! Holds which one of a fixed set of panels is visible.

/// Exactly one panel of type `P` is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSwitcher<P> {
    active: P,
}

impl<P: Copy + Eq> ViewSwitcher<P> {
    pub fn new(initial: P) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> P {
        self.active
    }

    pub fn is_visible(&self, panel: P) -> bool {
        self.active == panel
    }

    /// Show `panel` and hide its siblings. Returns true if the active
    /// panel changed.
    pub fn switch_to(&mut self, panel: P) -> bool {
        let changed = self.active != panel;
        self.active = panel;
        changed
    }
}

impl<P: Default + Copy + Eq> Default for ViewSwitcher<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}
