//! Trip Card
//!
//! One shopping trip: date, summary, chosen store and its list.

use crate::api::SyncError;
use crate::models::{ListItemPayload, ListSaveRequest, StoreRecord, TripRecord};

use super::items::{ItemList, ItemListOwner};
use super::{parse_quantity, EditTracker};

/// The store a trip is planned at
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSelection {
    pub id: Option<u32>,
    pub name: String,
    pub address: String,
}

impl From<&StoreRecord> for StoreSelection {
    fn from(store: &StoreRecord) -> Self {
        Self { id: Some(store.id), name: store.name.clone(), address: store.address.clone() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripCard {
    pub id: u32,
    pub date: String,
    pub summary: String,
    pub store: StoreSelection,
    items: ItemList,
    tracker: EditTracker,
}

impl TripCard {
    pub fn from_record(record: &TripRecord) -> Self {
        let mut items = ItemList::new();
        for item in &record.items {
            items.push(item.id, item.item_id, item.name.clone(), item.quantity.to_string());
        }
        Self {
            id: record.id,
            date: record.date.clone(),
            summary: record.summary.clone(),
            store: StoreSelection {
                id: record.store_id,
                name: record.store_name.clone(),
                address: record.store_address.clone(),
            },
            items,
            tracker: EditTracker::new(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.tracker.is_pending()
    }

    /// Only a confirmed save clears Edit-Pending; a failed one keeps the
    /// save button up so the user can retry.
    pub fn settle_save<T>(&mut self, outcome: &Result<T, SyncError>) {
        if outcome.is_ok() {
            self.tracker.mark_saved();
        }
    }

    pub fn set_summary(&mut self, summary: String) {
        self.summary = summary;
        self.tracker.mark_dirty();
    }

    pub fn set_date(&mut self, date: String) {
        self.date = date;
        self.tracker.mark_dirty();
    }

    /// Choose a catalog store by id; updates the shown address.
    pub fn select_store(&mut self, catalog: &[StoreRecord], id: u32) -> bool {
        match catalog.iter().find(|s| s.id == id) {
            Some(store) => {
                self.store = StoreSelection::from(store);
                self.tracker.mark_dirty();
                true
            }
            None => false,
        }
    }

    /// Build the `/lists_save` body. Rows with a blank name are skipped.
    pub fn to_payload(&self) -> ListSaveRequest {
        let items = self
            .items
            .rows()
            .iter()
            .filter_map(|row| {
                let name = row.name.trim();
                (!name.is_empty()).then(|| ListItemPayload {
                    id: row.id,
                    item_id: row.item_id,
                    name: name.to_string(),
                    quantity: parse_quantity(&row.quantity),
                })
            })
            .collect();

        ListSaveRequest {
            trip_id: self.id,
            summary: self.summary.trim().to_string(),
            store_id: self.store.id,
            date: self.date.clone(),
            store_name: self.store.name.clone(),
            store_address: self.store.address.trim().to_string(),
            items,
        }
    }
}

impl ItemListOwner for TripCard {
    fn items(&self) -> &ItemList {
        &self.items
    }

    fn items_mut(&mut self) -> &mut ItemList {
        &mut self.items
    }

    fn touched(&mut self) {
        self.tracker.mark_dirty();
    }

    /// Non-blank text reveals the save button; clearing it while the
    /// list has no rows hides it again.
    fn draft_input(&mut self, text: String) {
        let blank = text.trim().is_empty();
        self.items.set_draft_name(text);
        if !blank {
            self.tracker.mark_dirty();
        } else if self.items.is_empty() {
            self.tracker.withdraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{client, MockTransport};
    use crate::models::ListItemRecord;
    use serde_json::json;

    /// The record the card would be rendered from after a reload
    fn to_record(card: &TripCard) -> TripRecord {
        TripRecord {
            id: card.id,
            date: card.date.clone(),
            summary: card.summary.clone(),
            store_id: card.store.id,
            store_name: card.store.name.clone(),
            store_address: card.store.address.clone(),
            items: card
                .items
                .rows()
                .iter()
                .map(|row| ListItemRecord {
                    id: row.id,
                    item_id: row.item_id,
                    name: row.name.clone(),
                    quantity: parse_quantity(&row.quantity),
                })
                .collect(),
        }
    }

    fn record() -> TripRecord {
        serde_json::from_value(json!({
            "id": 4,
            "date": "2026-10-10",
            "summary": "Weekly shop ",
            "store_id": 2,
            "store_name": "Corner Market",
            "store_address": " 1 Main St ",
            "items": [
                { "id": 10, "item_id": 100, "name": "Milk", "quantity": 2 },
                { "id": 11, "name": "Bread", "quantity": 1 }
            ]
        }))
        .unwrap()
    }

    async fn save(card: &mut TripCard, transport: MockTransport) {
        let api = client(transport);
        let outcome = api.save_list(&card.to_payload()).await;
        card.settle_save(&outcome);
    }

    fn catalog() -> Vec<StoreRecord> {
        vec![
            StoreRecord { id: 2, name: "Corner Market".into(), address: "1 Main St".into() },
            StoreRecord { id: 3, name: "Big Box".into(), address: "9 Ring Rd".into() },
        ]
    }

    #[test]
    fn test_payload_shape() {
        let card = TripCard::from_record(&record());
        let value = serde_json::to_value(card.to_payload()).unwrap();
        assert_eq!(value, json!({
            "trip_id": 4,
            "summary": "Weekly shop",
            "store_id": 2,
            "date": "2026-10-10",
            "store_name": "Corner Market",
            "store_address": "1 Main St",
            "items": [
                { "id": 10, "itemId": 100, "name": "Milk", "quantity": 2 },
                { "id": 11, "itemId": null, "name": "Bread", "quantity": 1 }
            ]
        }));
    }

    #[test]
    fn test_rerender_is_idempotent() {
        let mut card = TripCard::from_record(&record());
        let key = card.items().keys()[1];
        card.edit_name(key, "   ".into());

        let first = card.to_payload();
        let rerendered = TripCard::from_record(&to_record(&card));
        assert_eq!(rerendered.to_payload(), first);
        assert_eq!(first.items.len(), 1);
    }

    #[test]
    fn test_blank_names_are_skipped() {
        let mut card = TripCard::from_record(&record());
        card.draft_input("Eggs".into());
        card.commit_draft();
        let key = card.items().keys()[0];
        card.edit_name(key, "".into());

        let names: Vec<_> = card.to_payload().items.into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Bread", "Eggs"]);
    }

    #[test]
    fn test_delete_all_sends_empty_items() {
        let mut card = TripCard::from_record(&record());
        for key in card.items().keys() {
            card.delete_row(key);
        }
        assert!(card.is_pending());
        let value = serde_json::to_value(card.to_payload()).unwrap();
        assert_eq!(value["items"], json!([]));
    }

    #[test]
    fn test_edits_reveal_until_saved() {
        let mut card = TripCard::from_record(&record());
        assert!(!card.is_pending());

        let key = card.items().keys()[0];
        card.toggle_checked(key);
        assert!(card.is_pending());
        assert_eq!(card.to_payload(), TripCard::from_record(&record()).to_payload());

        card.settle_save(&Ok(()));
        assert!(!card.is_pending());
    }

    #[test]
    fn test_select_store_updates_address() {
        let mut card = TripCard::from_record(&record());
        assert!(card.select_store(&catalog(), 3));
        assert_eq!(card.store.address, "9 Ring Rd");
        assert_eq!(card.to_payload().store_id, Some(3));
        assert!(card.is_pending());

        assert!(!card.select_store(&catalog(), 99));
        assert_eq!(card.store.name, "Big Box");
    }

    #[test]
    fn test_clearing_draft_on_empty_list_hides_save() {
        let mut card = TripCard::from_record(&TripRecord {
            id: 1,
            date: String::new(),
            summary: String::new(),
            store_id: None,
            store_name: String::new(),
            store_address: String::new(),
            items: vec![],
        });
        card.draft_input("Ch".into());
        assert!(card.is_pending());
        card.draft_input("".into());
        assert!(!card.is_pending());
    }

    #[test]
    fn test_clearing_draft_with_rows_keeps_save() {
        let mut card = TripCard::from_record(&record());
        card.draft_input("Ch".into());
        card.draft_input("".into());
        assert!(card.is_pending());
    }

    #[test]
    fn test_enter_and_blur_commit_once() {
        let mut card = TripCard::from_record(&record());
        card.draft_input("Cheese".into());
        let snapshot = card.items().draft().name.trim().to_string();

        card.commit_draft();
        card.commit_draft_if(&snapshot);

        assert_eq!(card.to_payload().items.len(), 3);
    }

    #[test]
    fn test_duplicate_store_names_keep_their_own_id() {
        let catalog = vec![
            StoreRecord { id: 2, name: "Costco".into(), address: "1 North Rd".into() },
            StoreRecord { id: 7, name: "Costco".into(), address: "9 South Rd".into() },
        ];
        let mut card = TripCard::from_record(&record());
        assert!(card.select_store(&catalog, 7));

        let payload = card.to_payload();
        assert_eq!(payload.store_id, Some(7));
        assert_eq!(payload.store_address, "9 South Rd");
    }

    #[tokio::test]
    async fn test_failed_save_keeps_pending() {
        let mut card = TripCard::from_record(&record());
        card.set_summary("Party shop".into());

        save(&mut card, MockTransport::default().reply(500, r#"{"error": "database is locked"}"#)).await;
        assert!(card.is_pending());

        save(&mut card, MockTransport::default().fail("Failed to fetch")).await;
        assert!(card.is_pending());

        save(&mut card, MockTransport::default().reply(200, r#"{"success": true}"#)).await;
        assert!(!card.is_pending());
    }
}
