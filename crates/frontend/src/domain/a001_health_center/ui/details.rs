use contracts::domain::centers::{Contact, UpdateCenter};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::api;
use super::super::resolve::use_center;
use crate::shared::http::use_api;

/// Editable profile of the resolved center. The form is populated from
/// the center already held in context, so no extra fetch happens here.
#[component]
pub fn CenterDetailsPage() -> impl IntoView {
    let api_client = use_api();
    let center = use_center();

    let (name, set_name) = signal(String::new());
    let (address_line, set_address_line) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (success, set_success) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    Effect::new(move |_| {
        let Some(center) = center.get() else {
            return;
        };
        set_name.set(center.name.clone());
        let address = center.address.clone().unwrap_or_default();
        let line = address.line1.clone().unwrap_or_else(|| {
            [address.city, address.district, address.province]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(", ")
        });
        set_address_line.set(line);
        let contact = center.contact.clone().unwrap_or_default();
        set_phone.set(contact.phone.unwrap_or_default());
        set_email.set(center.email.or(contact.email).unwrap_or_default());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_success.set(None);

        let Some(current) = center.get_untracked() else {
            return;
        };
        if name.get_untracked().trim().is_empty() {
            set_error.set(Some("Center name cannot be empty.".to_string()));
            return;
        }

        let optional = |value: String| {
            let trimmed = value.trim().to_string();
            (!trimmed.is_empty()).then_some(trimmed)
        };
        // keep city/district/province as resolved, only line1 is edited here
        let mut address = current.address.clone().unwrap_or_default();
        address.line1 = optional(address_line.get_untracked());
        let payload = UpdateCenter {
            name: name.get_untracked().trim().to_string(),
            address,
            contact: Contact {
                phone: optional(phone.get_untracked()),
                email: optional(email.get_untracked()),
            },
            email: optional(email.get_untracked()),
        };
        set_is_saving.set(true);
        spawn_local(async move {
            match api::update_center(api_client, &current.id, &payload).await {
                Ok(_) => {
                    let _ =
                        set_success.try_set(Some("Center details updated.".to_string()));
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.message()));
                }
            }
            let _ = set_is_saving.try_set(false);
        });
    };

    view! {
        <main class="health-main">
            <h2>"Center Details"</h2>
            <p class="muted">"Keep your center's public information up to date."</p>

            <Show when=move || error.get().is_some()>
                <div class="alert error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || success.get().is_some()>
                <div class="alert success">{move || success.get().unwrap_or_default()}</div>
            </Show>

            <form class="details-form" on:submit=on_submit>
                <label>
                    "Center name"
                    <input
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Address"
                    <input
                        prop:value=move || address_line.get()
                        on:input=move |ev| set_address_line.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Phone"
                    <input
                        prop:value=move || phone.get()
                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>

                <button class="btn btn-primary" type="submit" disabled=move || is_saving.get()>
                    {move || if is_saving.get() { "Saving..." } else { "Save changes" }}
                </button>
            </form>
        </main>
    }
}
