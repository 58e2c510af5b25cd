//! Store Select Component
//!
//! Dropdown over the store catalog. Options carry the store id, so stores
//! sharing a name stay distinct.

use leptos::prelude::*;

use crate::models::StoreRecord;
use crate::state::StoreSelection;

#[component]
pub fn StoreSelect(
    catalog: StoredValue<Vec<StoreRecord>>,
    #[prop(into)] selected: Signal<Option<StoreSelection>>,
    #[prop(into)] on_select: Callback<u32>,
) -> impl IntoView {
    // A trip may still point at a store that left the catalog; it is shown
    // but cannot be picked again once another store is chosen.
    let orphan = selected.get_untracked().filter(|current| {
        !current.name.is_empty()
            && catalog.with_value(|stores| stores.iter().all(|s| Some(s.id) != current.id))
    });
    let orphan = orphan.map(|current| {
        view! {
            <option value="" disabled=true selected=true>{current.name}</option>
        }
    });

    view! {
        <select
            class="form-select store-name-select"
            on:change=move |ev| {
                if let Ok(id) = event_target_value(&ev).parse::<u32>() {
                    on_select.run(id);
                }
            }
        >
            {orphan}
            {catalog.with_value(|stores| {
                stores
                    .iter()
                    .map(|store| {
                        let id = store.id;
                        view! {
                            <option
                                value=id.to_string()
                                data-store-id=id.to_string()
                                data-address=store.address.clone()
                                prop:selected=move || selected.with(|s| s.as_ref().and_then(|s| s.id) == Some(id))
                            >
                                {store.name.clone()}
                            </option>
                        }
                    })
                    .collect_view()
            })}
        </select>
    }
}
