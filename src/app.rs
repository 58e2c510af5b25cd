//! Household App
//!
//! Mounts the page named by the bootstrap data.

use leptos::prelude::*;

use crate::components::{MailPage, MealsPage, PromptPlanner, StoresPage, TripBoard};
use crate::config::{Bootstrap, ClientConfig, PageData};
use crate::context::AppContext;

#[component]
pub fn App(bootstrap: Result<Bootstrap, String>, origin: String) -> impl IntoView {
    let bootstrap = match bootstrap {
        Ok(bootstrap) => bootstrap,
        Err(message) => {
            log::error!("[APP] No page to show: {}", message);
            return view! {
                <div class="alert alert-danger" role="alert">
                    "This page could not be loaded: " {message}
                </div>
            }
            .into_any();
        }
    };

    // Provide context to all children
    provide_context(AppContext::new(ClientConfig::resolve(&bootstrap.client, &origin)));

    match bootstrap.page {
        PageData::Lists { trips, stores } => view! { <TripBoard trips=trips stores=stores /> }.into_any(),
        PageData::Meals { meals } => view! { <MealsPage meals=meals /> }.into_any(),
        PageData::Stores { stores } => view! { <StoresPage stores=stores /> }.into_any(),
        PageData::Prompt { stores } => view! { <PromptPlanner stores=stores /> }.into_any(),
        PageData::Mail => view! { <MailPage /> }.into_any(),
    }
}
