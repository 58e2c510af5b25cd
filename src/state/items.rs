//! Shopping-list rows and the new-item input.
//!
//! Shared by trip cards and the generated plan. The owner decides what an
//! edit means for its save button through [`ItemListOwner`].

use super::RowKey;

pub const CHECK_BUTTON_CLASS: &str = "btn btn-outline-success btn-sm check-item-btn";
pub const CHECK_BUTTON_CHECKED_CLASS: &str = "btn btn-success btn-sm check-item-btn";
pub const ROW_CHECKED_CLASS: &str = "text-decoration-line-through table-success";

/// One editable list line
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub key: RowKey,
    /// Persisted list-item id, `None` for rows added on this page
    pub id: Option<u32>,
    /// Catalog item reference
    pub item_id: Option<u32>,
    pub name: String,
    /// Raw quantity input text
    pub quantity: String,
    /// View-only strike-through state, never sent to the server
    pub checked: bool,
}

impl ListRow {
    pub fn check_button_class(&self) -> &'static str {
        if self.checked { CHECK_BUTTON_CHECKED_CLASS } else { CHECK_BUTTON_CLASS }
    }

    pub fn row_class(&self) -> &'static str {
        if self.checked { ROW_CHECKED_CLASS } else { "" }
    }
}

/// Content of the "New Item" row
#[derive(Debug, Clone, PartialEq)]
pub struct NewItemDraft {
    pub name: String,
    pub quantity: String,
}

impl Default for NewItemDraft {
    fn default() -> Self {
        Self { name: String::new(), quantity: "1".to_string() }
    }
}

/// Ordered rows plus the new-item draft
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemList {
    rows: Vec<ListRow>,
    draft: NewItemDraft,
    next_key: RowKey,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    pub fn row(&self, key: RowKey) -> Option<&ListRow> {
        self.rows.iter().find(|r| r.key == key)
    }

    pub fn keys(&self) -> Vec<RowKey> {
        self.rows.iter().map(|r| r.key).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn draft(&self) -> &NewItemDraft {
        &self.draft
    }

    /// Append a row and return its key
    pub fn push(&mut self, id: Option<u32>, item_id: Option<u32>, name: String, quantity: String) -> RowKey {
        let key = self.next_key;
        self.next_key += 1;
        self.rows.push(ListRow { key, id, item_id, name, quantity, checked: false });
        key
    }

    /// Replace all rows, as after a fresh render
    pub fn clear(&mut self) {
        self.rows.clear();
        self.draft = NewItemDraft::default();
    }

    fn row_mut(&mut self, key: RowKey) -> Option<&mut ListRow> {
        self.rows.iter_mut().find(|r| r.key == key)
    }

    pub fn set_name(&mut self, key: RowKey, name: String) -> bool {
        self.row_mut(key).map(|r| r.name = name).is_some()
    }

    pub fn set_quantity(&mut self, key: RowKey, quantity: String) -> bool {
        self.row_mut(key).map(|r| r.quantity = quantity).is_some()
    }

    pub fn toggle(&mut self, key: RowKey) -> bool {
        self.row_mut(key).map(|r| r.checked = !r.checked).is_some()
    }

    pub fn remove(&mut self, key: RowKey) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.key != key);
        self.rows.len() != before
    }

    pub fn set_draft_name(&mut self, name: String) {
        self.draft.name = name;
    }

    pub fn set_draft_quantity(&mut self, quantity: String) {
        self.draft.quantity = quantity;
    }

    /// Turn a non-blank draft into a new row and reset the draft.
    pub fn commit_draft(&mut self) -> Option<RowKey> {
        let name = self.draft.name.trim().to_string();
        if name.is_empty() {
            return None;
        }
        let quantity = match self.draft.quantity.trim() {
            "" => "1".to_string(),
            q => q.to_string(),
        };
        self.draft = NewItemDraft::default();
        Some(self.push(None, None, name, quantity))
    }

    /// Deferred blur commit: only commits if the draft still holds
    /// `expected`, so an Enter commit that already consumed it wins.
    pub fn commit_draft_if(&mut self, expected: &str) -> Option<RowKey> {
        if expected.is_empty() || self.draft.name.trim() != expected {
            return None;
        }
        self.commit_draft()
    }
}

/// A container that owns an [`ItemList`]
pub trait ItemListOwner {
    fn items(&self) -> &ItemList;

    fn items_mut(&mut self) -> &mut ItemList;

    /// Called after any change to the rows
    fn touched(&mut self) {}

    /// Typing in the new-item input
    fn draft_input(&mut self, text: String) {
        self.items_mut().set_draft_name(text);
    }

    fn edit_name(&mut self, key: RowKey, name: String) {
        if self.items_mut().set_name(key, name) {
            self.touched();
        }
    }

    fn edit_quantity(&mut self, key: RowKey, quantity: String) {
        if self.items_mut().set_quantity(key, quantity) {
            self.touched();
        }
    }

    fn toggle_checked(&mut self, key: RowKey) {
        if self.items_mut().toggle(key) {
            self.touched();
        }
    }

    fn delete_row(&mut self, key: RowKey) {
        if self.items_mut().remove(key) {
            self.touched();
        }
    }

    fn commit_draft(&mut self) -> Option<RowKey> {
        let key = self.items_mut().commit_draft();
        if key.is_some() {
            self.touched();
        }
        key
    }

    fn commit_draft_if(&mut self, expected: &str) -> Option<RowKey> {
        let key = self.items_mut().commit_draft_if(expected);
        if key.is_some() {
            self.touched();
        }
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(names: &[&str]) -> ItemList {
        let mut list = ItemList::new();
        for name in names {
            list.push(Some(1), None, name.to_string(), "1".to_string());
        }
        list
    }

    #[test]
    fn test_keys_are_unique_after_delete() {
        let mut list = list_with(&["a", "b"]);
        let first = list.keys()[0];
        list.remove(first);
        let added = list.push(None, None, "c".into(), "1".into());
        assert_ne!(added, first);
        assert_eq!(list.rows().len(), 2);
    }

    #[test]
    fn test_commit_trims_and_resets_draft() {
        let mut list = ItemList::new();
        list.set_draft_name("  Bread ".into());
        list.set_draft_quantity("".into());
        let key = list.commit_draft().unwrap();

        let row = list.row(key).unwrap();
        assert_eq!(row.name, "Bread");
        assert_eq!(row.quantity, "1");
        assert_eq!(row.id, None);
        assert_eq!(list.draft(), &NewItemDraft::default());
    }

    #[test]
    fn test_blank_draft_does_not_commit() {
        let mut list = ItemList::new();
        list.set_draft_name("   ".into());
        assert!(list.commit_draft().is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_enter_then_blur_adds_one_row() {
        let mut list = ItemList::new();
        list.set_draft_name("Milk".into());

        // blur snapshots the text, Enter commits before the grace delay ends
        let snapshot = list.draft().name.trim().to_string();
        assert!(list.commit_draft().is_some());
        assert!(list.commit_draft_if(&snapshot).is_none());

        assert_eq!(list.rows().len(), 1);
    }

    #[test]
    fn test_blur_alone_commits() {
        let mut list = ItemList::new();
        list.set_draft_name("Milk ".into());
        let snapshot = list.draft().name.trim().to_string();
        assert!(list.commit_draft_if(&snapshot).is_some());
        assert_eq!(list.rows()[0].name, "Milk");
    }

    #[test]
    fn test_blur_after_retyping_does_not_commit_stale_text() {
        let mut list = ItemList::new();
        list.set_draft_name("Milk".into());
        let snapshot = list.draft().name.trim().to_string();
        list.set_draft_name("Milk and honey".into());
        assert!(list.commit_draft_if(&snapshot).is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_classes() {
        let mut list = list_with(&["Apples"]);
        let key = list.keys()[0];
        let before = list.row(key).cloned().unwrap();

        list.toggle(key);
        let toggled = list.row(key).unwrap();
        assert_eq!(toggled.check_button_class(), CHECK_BUTTON_CHECKED_CLASS);
        assert_eq!(toggled.row_class(), ROW_CHECKED_CLASS);

        list.toggle(key);
        let restored = list.row(key).unwrap();
        assert_eq!(restored, &before);
        assert_eq!(restored.check_button_class(), before.check_button_class());
        assert_eq!(restored.row_class(), before.row_class());
    }
}
