//! Meal Card Component
//!
//! Editable date / type / summary card used by the meals page and the
//! planner results.

use leptos::prelude::*;

use crate::state::{MealField, MealRow, MEAL_TYPES};

/// Select over the fixed meal types
#[component]
pub fn MealTypeSelect(
    #[prop(into)] select_class: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select class=select_class on:change=move |ev| on_change.run(event_target_value(&ev))>
            {MEAL_TYPES
                .iter()
                .map(|meal_type| {
                    view! {
                        <option
                            value=*meal_type
                            prop:selected=move || value.with(|v| v.as_str() == *meal_type)
                        >
                            {*meal_type}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn MealCard(
    #[prop(into)] meal: Signal<MealRow>,
    #[prop(into)] on_edit: Callback<MealField>,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="card meal-card w-100 mb-3 shadow-lg border-0">
            <div class="card-body">
                <div class="row g-2 mb-3">
                    <div class="col-md-6">
                        <input
                            type="date"
                            class="form-control meal-date"
                            data-meal-id=move || meal.with(|m| m.id.map(|id| id.to_string()))
                            prop:value=move || meal.with(|m| m.date.clone())
                            on:input=move |ev| on_edit.run(MealField::Date(event_target_value(&ev)))
                        />
                    </div>
                    <div class="col-md-6">
                        <MealTypeSelect
                            select_class="form-select meal-type"
                            value=Signal::derive(move || meal.with(|m| m.meal_type.clone()))
                            on_change=move |meal_type: String| on_edit.run(MealField::Type(meal_type))
                        />
                    </div>
                </div>
                <div class="mb-3">
                    <textarea
                        class="form-control meal-summary"
                        prop:value=move || meal.with(|m| m.summary.clone())
                        on:input=move |ev| on_edit.run(MealField::Summary(event_target_value(&ev)))
                    ></textarea>
                </div>
                <button
                    type="button"
                    class="btn btn-sm btn-outline-danger delete-meal-btn"
                    on:click=move |_| on_delete.run(())
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
