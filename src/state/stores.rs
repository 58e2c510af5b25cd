//! Stores Table

use crate::models::{StorePayload, StoreRecord, StoresSaveRequest};

use super::{EditTracker, RowKey};

#[derive(Debug, Clone, PartialEq)]
pub struct StoreRow {
    pub key: RowKey,
    pub id: Option<u32>,
    pub name: String,
    pub address: String,
}

impl StoreRow {
    /// New rows get a Cancel button instead of Delete
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoresTable {
    rows: Vec<StoreRow>,
    next_key: RowKey,
    tracker: EditTracker,
}

impl StoresTable {
    pub fn from_records(records: &[StoreRecord]) -> Self {
        let mut table = Self::default();
        for store in records {
            let key = table.next_key();
            table.rows.push(StoreRow {
                key,
                id: Some(store.id),
                name: store.name.clone(),
                address: store.address.clone(),
            });
        }
        table
    }

    fn next_key(&mut self) -> RowKey {
        let key = self.next_key;
        self.next_key += 1;
        key
    }

    pub fn row(&self, key: RowKey) -> Option<&StoreRow> {
        self.rows.iter().find(|r| r.key == key)
    }

    pub fn keys(&self) -> Vec<RowKey> {
        self.rows.iter().map(|r| r.key).collect()
    }

    pub fn is_pending(&self) -> bool {
        self.tracker.is_pending()
    }

    /// Insert a blank new-store row at the top of the table.
    pub fn add_new_row(&mut self) -> RowKey {
        let key = self.next_key();
        self.rows.insert(0, StoreRow { key, id: None, name: String::new(), address: String::new() });
        key
    }

    pub fn edit(&mut self, key: RowKey, edit: impl FnOnce(&mut StoreRow)) {
        if self.rows.iter_mut().find(|r| r.key == key).map(edit).is_some() {
            self.tracker.mark_dirty();
        }
    }

    /// Delete an existing row, or cancel a new one.
    pub fn remove(&mut self, key: RowKey) {
        let Some(pos) = self.rows.iter().position(|r| r.key == key) else {
            return;
        };
        let removed = self.rows.remove(pos);
        if !removed.is_new() {
            self.tracker.mark_dirty();
        }
    }

    /// Collect the `/stores_save` body: existing rows first, then new
    /// ones, skipping rows without a name.
    pub fn to_payload(&self) -> StoresSaveRequest {
        let payload = |row: &StoreRow| StorePayload {
            id: row.id,
            name: row.name.trim().to_string(),
            address: row.address.trim().to_string(),
        };
        let named = |row: &&StoreRow| !row.name.trim().is_empty();

        let existing = self.rows.iter().filter(|r| !r.is_new()).filter(named).map(payload);
        let added = self.rows.iter().filter(|r| r.is_new()).filter(named).map(payload);
        StoresSaveRequest { stores: existing.chain(added).collect() }
    }
}
