//! Trip Board Component
//!
//! Carousel of trip cards on the lists page. Every card keeps its own
//! state; hidden cards keep their unsaved edits.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::components::{ItemTable, StoreSelect};
use crate::context::AppContext;
use crate::models::{StoreRecord, TripRecord};
use crate::state::{Carousel, TripCard};

#[component]
pub fn TripBoard(trips: Vec<TripRecord>, stores: Vec<StoreRecord>) -> impl IntoView {
    let catalog = StoredValue::new(stores);
    let cards: Vec<RwSignal<TripCard>> = trips
        .iter()
        .map(|trip| RwSignal::new(TripCard::from_record(trip)))
        .collect();
    let carousel = RwSignal::new(Carousel::new(cards.len()));

    log::info!("[LISTS] Showing {} trips", cards.len());

    view! {
        <div class="trip-board">
            <div class="d-flex justify-content-between mb-3">
                <button
                    id="prev-btn"
                    class="btn btn-outline-primary"
                    disabled=move || carousel.with(|c| !c.can_prev())
                    on:click=move |_| carousel.update(Carousel::prev)
                >
                    "Previous"
                </button>
                <button
                    id="next-btn"
                    class="btn btn-outline-primary"
                    disabled=move || carousel.with(|c| !c.can_next())
                    on:click=move |_| carousel.update(Carousel::next)
                >
                    "Next"
                </button>
            </div>

            {cards.is_empty().then(|| view! { <p class="text-muted">"No trips yet."</p> })}

            {cards
                .into_iter()
                .enumerate()
                .map(|(index, card)| {
                    view! {
                        <div class=move || {
                            if carousel.with(|c| c.is_current(index)) { "trip-slide" } else { "trip-slide d-none" }
                        }>
                            <TripCardView card=card catalog=catalog />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// One trip: store, date, summary and its list
#[component]
fn TripCardView(card: RwSignal<TripCard>, catalog: StoredValue<Vec<StoreRecord>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let save = move |_: web_sys::MouseEvent| {
        let payload = card.with_untracked(|c| c.to_payload());
        let api = ctx.api();
        spawn_local(async move {
            let outcome = api.save_list(&payload).await;
            card.update(|c| c.settle_save(&outcome));
            match outcome {
                Ok(after) => {
                    browser::alert("List saved successfully!");
                    browser::apply(after);
                }
                Err(e) => {
                    log::error!("[LISTS] Save failed for trip {}: {}", payload.trip_id, e);
                    browser::alert(&format!("Failed to save list because {}", e));
                }
            }
        });
    };

    view! {
        <div class="card trip-card shadow-lg border-0" data-trip-id=move || card.with(|c| c.id.to_string())>
            <div class="card-body">
                <div class="row g-2 mb-3">
                    <div class="col-md-6">
                        <StoreSelect
                            catalog=catalog
                            selected=Signal::derive(move || card.with(|c| Some(c.store.clone())))
                            on_select=move |id: u32| {
                                catalog.with_value(|stores| {
                                    card.update(|c| {
                                        c.select_store(stores, id);
                                    })
                                })
                            }
                        />
                        <small class="text-muted current-trip-address">
                            {move || card.with(|c| c.store.address.clone())}
                        </small>
                    </div>
                    <div class="col-md-6">
                        <input
                            type="date"
                            class="form-control trip-date-input"
                            prop:value=move || card.with(|c| c.date.clone())
                            on:input=move |ev| {
                                let date = event_target_value(&ev);
                                card.update(|c| c.set_date(date));
                            }
                        />
                    </div>
                </div>
                <input
                    type="text"
                    class="form-control mb-3 trip-summary-input"
                    placeholder="Trip summary"
                    prop:value=move || card.with(|c| c.summary.clone())
                    on:input=move |ev| {
                        let summary = event_target_value(&ev);
                        card.update(|c| c.set_summary(summary));
                    }
                />

                <ItemTable card=card />

                <Show when=move || card.with(|c| c.is_pending())>
                    <div class="save-button-container text-end">
                        <button type="button" class="btn btn-success save-list-btn" on:click=save>
                            "Save"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
