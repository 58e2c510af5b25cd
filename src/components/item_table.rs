//! Item Table Component
//!
//! Editable shopping-list rows plus the trailing new-item row. Shared by
//! trip cards and the planner results.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::{ItemListOwner, RowKey, CHECK_BUTTON_CLASS};

/// Grace period before a blurred new-item input commits
const BLUR_GRACE_MS: u32 = 50;

/// Table of list items owned by `card`
#[component]
pub fn ItemTable<C>(card: RwSignal<C>) -> impl IntoView
where
    C: ItemListOwner + Send + Sync + 'static,
{
    view! {
        <table class="table trip-item-table align-middle">
            <thead>
                <tr>
                    <th></th>
                    <th>"Item"</th>
                    <th>"Qty"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || card.with(|c| c.items().keys())
                    key=|key| *key
                    children=move |key| view! { <ListItemRow card=card row_key=key /> }
                />
                <NewItemRow card=card />
            </tbody>
        </table>
    }
}

/// One editable list row
#[component]
fn ListItemRow<C>(card: RwSignal<C>, row_key: RowKey) -> impl IntoView
where
    C: ItemListOwner + Send + Sync + 'static,
{
    let row = move || card.with(|c| c.items().row(row_key).cloned());

    view! {
        <tr
            class=move || row().map(|r| r.row_class()).unwrap_or("")
            data-list-item-id=move || row().and_then(|r| r.id).map(|id| id.to_string())
            data-item-id=move || row().and_then(|r| r.item_id).map(|id| id.to_string())
        >
            <td>
                <button
                    type="button"
                    class=move || row().map(|r| r.check_button_class()).unwrap_or(CHECK_BUTTON_CLASS)
                    on:click=move |_| card.update(|c| c.toggle_checked(row_key))
                >
                    "✓"
                </button>
            </td>
            <td>
                <input
                    type="text"
                    class="form-control item-name-input"
                    prop:value=move || row().map(|r| r.name).unwrap_or_default()
                    on:input=move |ev| {
                        let name = event_target_value(&ev);
                        card.update(|c| c.edit_name(row_key, name));
                    }
                />
            </td>
            <td>
                <input
                    type="number"
                    min="1"
                    class="form-control item-quantity-input"
                    prop:value=move || row().map(|r| r.quantity).unwrap_or_default()
                    on:input=move |ev| {
                        let quantity = event_target_value(&ev);
                        card.update(|c| c.edit_quantity(row_key, quantity));
                    }
                />
            </td>
            <td>
                <button
                    type="button"
                    class="btn btn-outline-danger btn-sm delete-item-btn"
                    on:click=move |_| card.update(|c| c.delete_row(row_key))
                >
                    "×"
                </button>
            </td>
        </tr>
    }
}

/// Input row that turns typed text into a new list row
#[component]
fn NewItemRow<C>(card: RwSignal<C>) -> impl IntoView
where
    C: ItemListOwner + Send + Sync + 'static,
{
    let draft_name = move || card.with(|c| c.items().draft().name.clone());
    let draft_quantity = move || card.with(|c| c.items().draft().quantity.clone());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            card.update(|c| {
                c.commit_draft();
            });
        }
    };

    let on_blur = move |_: web_sys::FocusEvent| {
        let expected = card.with_untracked(|c| c.items().draft().name.trim().to_string());
        if expected.is_empty() {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(BLUR_GRACE_MS).await;
            card.update(|c| {
                c.commit_draft_if(&expected);
            });
        });
    };

    view! {
        <tr class="new-item-row">
            <td></td>
            <td>
                <input
                    type="text"
                    class="form-control new-item-name"
                    placeholder="Add item..."
                    prop:value=draft_name
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        card.update(|c| c.draft_input(text));
                    }
                    on:keydown=on_keydown
                    on:blur=on_blur
                />
            </td>
            <td>
                <input
                    type="number"
                    min="1"
                    class="form-control new-item-quantity"
                    prop:value=draft_quantity
                    on:input=move |ev| {
                        let quantity = event_target_value(&ev);
                        card.update(|c| c.items_mut().set_draft_quantity(quantity));
                    }
                />
            </td>
            <td></td>
        </tr>
    }
}
