//! Mail Page Component
//!
//! Mailbox listings, the email reader and the compose form, driven by the
//! mail store.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::browser;
use crate::context::AppContext;
use crate::models::Email;
use crate::state::{email_card_class, reply_to, ComposeForm, Mailbox, MailView};
use crate::store::{use_mail_store, MailState, MailStateStoreFields, MailStore};

/// List a mailbox, replacing the shown cards
fn load_mailbox(store: MailStore, ctx: AppContext, mailbox: Mailbox) {
    store.view().set(MailView::Listing(mailbox));
    store.emails().set(Vec::new());
    let api = ctx.api();
    spawn_local(async move {
        match api.list_mailbox(mailbox).await {
            Ok(emails) => {
                log::info!("[MAIL] Loaded {} emails from {}", emails.len(), mailbox.as_str());
                if store.view().get_untracked() == MailView::Listing(mailbox) {
                    store.emails().set(emails);
                }
            }
            Err(e) => {
                log::error!("[MAIL] Could not load {}: {}", mailbox.as_str(), e);
                browser::alert(&format!("Failed to load {}: {}", mailbox.title(), e));
            }
        }
    });
}

/// Show one email, then mark it read in the background
fn read_email(store: MailStore, ctx: AppContext, id: u32) {
    store.view().set(MailView::Reading(id));
    store.open_email().set(None);
    let api = ctx.api();
    spawn_local(async move {
        match api.get_email(id).await {
            Ok(email) => {
                if store.view().get_untracked() == MailView::Reading(id) {
                    store.open_email().set(Some(email));
                }
                api.mark_read(id).await;
            }
            Err(e) => {
                log::error!("[MAIL] Could not load email {}: {}", id, e);
                browser::alert(&format!("Failed to load email: {}", e));
            }
        }
    });
}

fn compose(store: MailStore, form: ComposeForm) {
    store.compose().set(form);
    store.view().set(MailView::Composing);
}

fn toggle_archived(store: MailStore, ctx: AppContext, email: &Email) {
    let (id, archived) = (email.id, !email.archived);
    let api = ctx.api();
    spawn_local(async move {
        match api.set_archived(id, archived).await {
            Ok(()) => {
                log::info!("[MAIL] Email {} archived={}", id, archived);
                load_mailbox(store, ctx, Mailbox::Inbox);
            }
            Err(e) => {
                log::error!("[MAIL] Could not update email {}: {}", id, e);
                browser::alert(&format!("Failed to update email: {}", e));
            }
        }
    });
}

#[component]
pub fn MailPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = Store::new(MailState::default());
    provide_context(store);

    load_mailbox(store, ctx, Mailbox::Inbox);

    let current_view = move || store.view().get();

    view! {
        <div class="mail-page">
            <div class="mb-3">
                {Mailbox::ALL
                    .iter()
                    .map(|&mailbox| {
                        view! {
                            <button
                                id=mailbox.as_str()
                                class="btn btn-sm btn-outline-primary me-1"
                                on:click=move |_| load_mailbox(store, ctx, mailbox)
                            >
                                {mailbox.title()}
                            </button>
                        }
                    })
                    .collect_view()}
                <button
                    id="compose"
                    class="btn btn-sm btn-outline-primary"
                    on:click=move |_| compose(store, ComposeForm::default())
                >
                    "Compose"
                </button>
            </div>
            <hr />

            <Show when=move || current_view().shows_emails_panel()>
                <div id="emails-view">
                    {move || match current_view() {
                        MailView::Listing(mailbox) => view! { <MailboxListing mailbox=mailbox /> }.into_any(),
                        MailView::Reading(_) => view! { <EmailReader /> }.into_any(),
                        MailView::Composing => view! { <div></div> }.into_any(),
                    }}
                </div>
            </Show>

            <Show when=move || current_view().shows_compose_panel()>
                <ComposePanel />
            </Show>
        </div>
    }
}

#[component]
fn MailboxListing(mailbox: Mailbox) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_mail_store();

    view! {
        <h3>{mailbox.title()}</h3>
        <For
            each=move || store.emails().get()
            key=|email| (email.id, email.read)
            children=move |email| {
                let id = email.id;
                view! {
                    <div
                        class=email_card_class(&email)
                        style="cursor: pointer; margin-bottom: 10px;"
                        on:click=move |_| read_email(store, ctx, id)
                    >
                        <div class="card-body">
                            <div class="d-flex justify-content-between">
                                <strong>{mailbox.card_title(&email)}</strong>
                                <span>{email.timestamp.clone()}</span>
                            </div>
                            <div>{email.subject.clone()}</div>
                        </div>
                    </div>
                }
            }
        />
    }
}

#[component]
fn EmailReader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_mail_store();

    move || match store.open_email().get() {
        None => view! { <h3>"Loading Email..."</h3> }.into_any(),
        Some(email) => {
            let archive_label = if email.archived { "Unarchive" } else { "Archive" };
            let for_archive = email.clone();
            let for_reply = email.clone();
            view! {
                <div class="card bg-light">
                    <div class="card-header">
                        <div class="d-flex justify-content-between">
                            <h5>
                                <span class="mail-label">"From:"</span>
                                <strong>{email.sender.clone()}</strong>
                            </h5>
                            <span class="text-muted">"on " {email.timestamp.clone()}</span>
                        </div>
                        <h5>
                            <span class="mail-label">"To:"</span>
                            <strong>{email.recipients.join(", ")}</strong>
                        </h5>
                        <h5>
                            <span class="mail-label">"Subject:"</span>
                            <strong>{email.subject.clone()}</strong>
                        </h5>
                    </div>
                    <div class="card-body" style="white-space: pre-wrap;">{email.body.clone()}</div>
                </div>
                <div class="button-group mt-3">
                    <button
                        class="btn btn-sm btn-outline-danger"
                        on:click=move |_| toggle_archived(store, ctx, &for_archive)
                    >
                        {archive_label}
                    </button>
                    <button
                        class="btn btn-sm btn-outline-primary ms-2"
                        on:click=move |_| compose(store, reply_to(&for_reply))
                    >
                        "Reply"
                    </button>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn ComposePanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_mail_store();

    let send = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = store.compose().with_untracked(|form| form.to_request());
        log::info!("[MAIL] Sending email to: {}", request.recipients);
        let api = ctx.api();
        spawn_local(async move {
            match api.send_email(&request).await {
                Ok(message) => {
                    log::info!("[MAIL] {}", message);
                    load_mailbox(store, ctx, Mailbox::Sent);
                }
                Err(e) => {
                    log::error!("[MAIL] Send failed: {}", e);
                    browser::alert(&format!("An error occurred while sending the email.\n{}", e));
                }
            }
        });
    };

    view! {
        <div id="compose-view">
            <h3>"New Email"</h3>
            <form id="compose-form" on:submit=send>
                <div class="form-group mb-2">
                    <input
                        id="compose-recipients"
                        class="form-control"
                        placeholder="Recipients"
                        prop:value=move || store.compose().with(|form| form.recipients.clone())
                        on:input=move |ev| {
                            let recipients = event_target_value(&ev);
                            store.compose().update(|form| form.recipients = recipients);
                        }
                    />
                </div>
                <div class="form-group mb-2">
                    <input
                        id="compose-subject"
                        class="form-control"
                        placeholder="Subject"
                        prop:value=move || store.compose().with(|form| form.subject.clone())
                        on:input=move |ev| {
                            let subject = event_target_value(&ev);
                            store.compose().update(|form| form.subject = subject);
                        }
                    />
                </div>
                <textarea
                    id="compose-body"
                    class="form-control mb-2"
                    placeholder="Body"
                    rows="8"
                    prop:value=move || store.compose().with(|form| form.body.clone())
                    on:input=move |ev| {
                        let body = event_target_value(&ev);
                        store.compose().update(|form| form.body = body);
                    }
                ></textarea>
                <input type="submit" class="btn btn-primary" value="Send" />
            </form>
        </div>
    }
}
