//! Stores Page Component
//!
//! Editable store table; new rows open at the top.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::context::AppContext;
use crate::models::StoreRecord;
use crate::state::{RowKey, StoresTable};

#[component]
pub fn StoresPage(stores: Vec<StoreRecord>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let table = RwSignal::new(StoresTable::from_records(&stores));
    // Row whose name input takes focus once mounted
    let focus_key = RwSignal::new(None::<RowKey>);

    let add_store = move |_: web_sys::MouseEvent| {
        let mut key = None;
        table.update(|t| key = Some(t.add_new_row()));
        focus_key.set(key);
    };

    let save = move |_: web_sys::MouseEvent| {
        let payload = table.with_untracked(|t| t.to_payload());
        let api = ctx.api();
        spawn_local(async move {
            match api.save_stores(&payload).await {
                Ok(after) => {
                    browser::alert("Stores saved successfully!");
                    browser::apply(after);
                }
                Err(e) => {
                    log::error!("[STORES] Save failed: {}", e);
                    browser::alert(&format!("Failed to save stores: {}", e));
                }
            }
        });
    };

    view! {
        <div class="stores-page">
            <div class="d-flex gap-2 mb-3">
                <button id="new-store-btn" class="btn btn-primary" on:click=add_store>
                    "New Store"
                </button>
                <Show when=move || table.with(|t| t.is_pending())>
                    <button id="save-stores-btn" class="btn btn-success" on:click=save>
                        "Save Stores"
                    </button>
                </Show>
            </div>
            <table class="table align-middle">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Address"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody id="stores-tbody">
                    <For
                        each=move || table.with(|t| t.keys())
                        key=|key| *key
                        children=move |key| view! { <StoreRowView table=table row_key=key focus_key=focus_key /> }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn StoreRowView(table: RwSignal<StoresTable>, row_key: RowKey, focus_key: RwSignal<Option<RowKey>>) -> impl IntoView {
    let row = move || table.with(|t| t.row(row_key).cloned());
    let is_new = table.with_untracked(|t| t.row(row_key).map(|r| r.is_new()).unwrap_or(false));
    let name_ref: NodeRef<html::Input> = NodeRef::new();

    Effect::new(move |_| {
        if let Some(input) = name_ref.get() {
            if focus_key.get_untracked() == Some(row_key) {
                let _ = input.focus();
                focus_key.set(None);
            }
        }
    });

    let (row_class, name_class, address_class) = if is_new {
        ("new-store-row", "form-control form-control-sm new-store-name", "form-control form-control-sm new-store-address")
    } else {
        ("store-row", "form-control form-control-sm store-name", "form-control form-control-sm store-address")
    };

    view! {
        <tr class=row_class data-store-id=move || row().and_then(|r| r.id).map(|id| id.to_string())>
            <td>
                <input
                    type="text"
                    class=name_class
                    placeholder="Store Name"
                    node_ref=name_ref
                    prop:value=move || row().map(|r| r.name).unwrap_or_default()
                    on:input=move |ev| {
                        let name = event_target_value(&ev);
                        table.update(|t| t.edit(row_key, |r| r.name = name));
                    }
                />
            </td>
            <td>
                <input
                    type="text"
                    class=address_class
                    placeholder="Address"
                    prop:value=move || row().map(|r| r.address).unwrap_or_default()
                    on:input=move |ev| {
                        let address = event_target_value(&ev);
                        table.update(|t| t.edit(row_key, |r| r.address = address));
                    }
                />
            </td>
            <td>
                {if is_new {
                    view! {
                        <button
                            type="button"
                            class="btn btn-sm btn-secondary cancel-new-store-btn"
                            on:click=move |_| table.update(|t| t.remove(row_key))
                        >
                            "Cancel"
                        </button>
                    }.into_any()
                } else {
                    view! {
                        <button
                            type="button"
                            class="btn btn-sm btn-outline-danger delete-store-btn"
                            on:click=move |_| table.update(|t| t.remove(row_key))
                        >
                            "Delete"
                        </button>
                    }.into_any()
                }}
            </td>
        </tr>
    }
}
