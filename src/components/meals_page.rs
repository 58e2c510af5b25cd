//! Meals Page Component
//!
//! Meal cards with a "new meal" form that opens at the top of the list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::components::{MealCard, MealTypeSelect};
use crate::context::AppContext;
use crate::models::MealRecord;
use crate::state::{MealField, MealsPanel, MealsView};

#[component]
pub fn MealsPage(meals: Vec<MealRecord>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let panel = RwSignal::new(MealsPanel::from_records(&meals));

    let save = move |_: web_sys::MouseEvent| {
        let payload = match panel.with_untracked(|p| p.to_payload()) {
            Ok(payload) => payload,
            Err(e) => {
                browser::alert(&e.to_string());
                return;
            }
        };
        let api = ctx.api();
        spawn_local(async move {
            match api.save_meals(&payload).await {
                Ok(after) => {
                    browser::alert("Meals saved successfully!");
                    browser::apply(after);
                }
                Err(e) => {
                    log::error!("[MEALS] Save failed: {}", e);
                    browser::alert(&format!("Failed to save meals: {}", e));
                }
            }
        });
    };

    let is_view = move |view: MealsView| panel.with(|p| p.view() == view);

    view! {
        <div class="meals-page">
            <div class="d-flex gap-2 mb-3">
                <Show when=move || is_view(MealsView::Default)>
                    <button
                        id="new-meal-btn"
                        class="btn btn-primary"
                        on:click=move |_| panel.update(|p| p.open_new_form(&browser::today()))
                    >
                        "New Meal"
                    </button>
                </Show>
                <Show when=move || panel.with(|p| p.is_pending())>
                    <button id="save-meals-btn" class="btn btn-success" on:click=save>
                        "Save Meals"
                    </button>
                </Show>
            </div>

            <div id="meals-container">
                <Show when=move || is_view(MealsView::NewEntry)>
                    <NewMealCard panel=panel />
                </Show>
                <For
                    each=move || panel.with(|p| p.meals().keys())
                    key=|key| *key
                    children=move |key| {
                        view! {
                            <MealCard
                                meal=Signal::derive(move || {
                                    panel.with(|p| p.meals().row(key).cloned().unwrap_or_default())
                                })
                                on_edit=move |field: MealField| panel.update(|p| p.edit_meal(key, |m| field.apply(m)))
                                on_delete=move |_: ()| panel.update(|p| p.delete_meal(key))
                            />
                        }
                    }
                />
            </div>
        </div>
    }
}

/// The new-meal form
#[component]
fn NewMealCard(panel: RwSignal<MealsPanel>) -> impl IntoView {
    view! {
        <div class="card new-meal-card w-100 mb-3 shadow-lg border-0">
            <div class="card-body">
                <div class="row g-2 mb-3">
                    <div class="col-md-6">
                        <input
                            type="date"
                            class="form-control new-meal-date"
                            prop:value=move || panel.with(|p| p.form.date.clone())
                            on:input=move |ev| {
                                let date = event_target_value(&ev);
                                panel.update(|p| p.edit_form(|f| f.date = date));
                            }
                        />
                    </div>
                    <div class="col-md-6">
                        <MealTypeSelect
                            select_class="form-select new-meal-type"
                            value=Signal::derive(move || panel.with(|p| p.form.meal_type.clone()))
                            on_change=move |meal_type: String| panel.update(|p| p.edit_form(|f| f.meal_type = meal_type))
                        />
                    </div>
                </div>
                <div class="mb-3">
                    <textarea
                        class="form-control new-meal-summary"
                        placeholder="What's for this meal?"
                        prop:value=move || panel.with(|p| p.form.summary.clone())
                        on:input=move |ev| {
                            let summary = event_target_value(&ev);
                            panel.update(|p| p.edit_form(|f| f.summary = summary));
                        }
                    ></textarea>
                </div>
                <button
                    type="button"
                    class="btn btn-sm btn-secondary cancel-new-meal-btn"
                    on:click=move |_| panel.update(|p| p.cancel_new_form())
                >
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
