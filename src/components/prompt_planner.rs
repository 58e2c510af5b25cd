//! Prompt Planner Component
//!
//! Generates meals and a shopping list from a free-text prompt, lets the
//! user edit the result, then saves it as a new trip.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::components::{ItemTable, MealCard, StoreSelect};
use crate::context::AppContext;
use crate::models::StoreRecord;
use crate::state::{MealField, PlanDraft, PromptView};
use crate::store::BusyGuard;

#[component]
pub fn PromptPlanner(stores: Vec<StoreRecord>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let draft = RwSignal::new(PlanDraft::new(&browser::today(), &stores));
    let catalog = StoredValue::new(stores);
    let generating = RwSignal::new(false);

    let generate = move |_: web_sys::MouseEvent| {
        let prompt = match draft.with_untracked(|d| d.validated_prompt()) {
            Ok(prompt) => prompt,
            Err(e) => {
                browser::alert(&e.to_string());
                return;
            }
        };
        let Some(guard) = BusyGuard::acquire(generating) else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let _guard = guard;
            match api.generate_plan(&prompt).await {
                Ok(plan) => {
                    catalog.with_value(|stores| draft.update(|d| d.apply_generated(plan, &prompt, stores)));
                }
                Err(e) => {
                    log::error!("[PROMPT] Generation failed: {}", e);
                    browser::alert(&format!("Failed to generate plan: {}", e));
                }
            }
        });
    };

    let save = move |_: web_sys::MouseEvent| {
        let payload = match draft.with_untracked(|d| d.to_payload()) {
            Ok(payload) => payload,
            Err(e) => {
                browser::alert(&e.to_string());
                return;
            }
        };
        let api = ctx.api();
        spawn_local(async move {
            match api.save_plan(&payload).await {
                Ok(after) => {
                    browser::alert("Data saved successfully!");
                    browser::apply(after);
                }
                Err(e) => {
                    log::error!("[PROMPT] Save failed: {}", e);
                    browser::alert(&format!("Failed to save data: {}", e));
                }
            }
        });
    };

    view! {
        <div class="prompt-planner">
            <div class="card mb-4 shadow-lg border-0">
                <div class="card-body">
                    <textarea
                        id="user-prompt"
                        class="form-control mb-3"
                        rows="4"
                        placeholder="Describe your trip, e.g. a weekend of camping for four"
                        prop:value=move || draft.with(|d| d.prompt.clone())
                        on:input=move |ev| {
                            let prompt = event_target_value(&ev);
                            draft.update(|d| d.prompt = prompt);
                        }
                    ></textarea>
                    <button
                        id="generate-btn"
                        class="btn btn-primary"
                        disabled=move || generating.get()
                        on:click=generate
                    >
                        "Generate"
                    </button>
                    <Show when=move || generating.get()>
                        <div id="loading-spinner" class="spinner-border spinner-border-sm ms-2" role="status">
                            <span class="visually-hidden">"Loading..."</span>
                        </div>
                    </Show>
                </div>
            </div>

            <Show when=move || draft.with(|d| d.view() == PromptView::Results)>
                <div id="results-section">
                    <div class="row g-2 mb-3">
                        <div class="col-md-4">
                            <input
                                id="trip-date"
                                type="date"
                                class="form-control"
                                prop:value=move || draft.with(|d| d.date.clone())
                                on:input=move |ev| {
                                    let date = event_target_value(&ev);
                                    draft.update(|d| d.date = date);
                                }
                            />
                        </div>
                        <div class="col-md-8">
                            <StoreSelect
                                catalog=catalog
                                selected=Signal::derive(move || draft.with(|d| d.store.clone()))
                                on_select=move |id: u32| {
                                    catalog.with_value(|stores| draft.update(|d| d.select_store(stores, id)))
                                }
                            />
                        </div>
                    </div>
                    <input
                        id="trip-summary"
                        type="text"
                        class="form-control mb-3"
                        placeholder="Trip summary"
                        prop:value=move || draft.with(|d| d.summary.clone())
                        on:input=move |ev| {
                            let summary = event_target_value(&ev);
                            draft.update(|d| d.summary = summary);
                        }
                    />

                    <h4>"Meals"</h4>
                    <div id="meals-container">
                        <For
                            each=move || draft.with(|d| d.meals().keys())
                            key=|key| *key
                            children=move |key| {
                                view! {
                                    <MealCard
                                        meal=Signal::derive(move || {
                                            draft.with(|d| d.meals().row(key).cloned().unwrap_or_default())
                                        })
                                        on_edit=move |field: MealField| draft.update(|d| {
                                            d.meals_mut().edit(key, |m| field.apply(m));
                                        })
                                        on_delete=move |_: ()| draft.update(|d| d.delete_meal(key))
                                    />
                                }
                            }
                        />
                    </div>

                    <h4>"Shopping List"</h4>
                    <ItemTable card=draft />

                    <button id="save-btn" class="btn btn-success" on:click=save>
                        "Save"
                    </button>
                </div>
            </Show>
        </div>
    }
}
