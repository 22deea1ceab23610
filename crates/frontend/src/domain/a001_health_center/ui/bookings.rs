use contracts::domain::bookings::{BookingStatus, LabBooking};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::api;
use crate::shared::date_utils::format_day;
use crate::shared::http::use_api;

fn status_class(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "status pending",
        BookingStatus::Completed => "status completed",
        BookingStatus::Cancelled => "status cancelled",
    }
}

/// Bookings table with search and status updates. Status changes are
/// applied optimistically; when the server rejects one, the whole list is
/// refetched instead of undoing the local edit by hand.
#[component]
pub fn CenterBookingsPage() -> impl IntoView {
    let api_client = use_api();

    let (bookings, set_bookings) = signal(Vec::<LabBooking>::new());
    let (search, set_search) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move |query: String| {
        set_is_loading.set(true);
        spawn_local(async move {
            match api::fetch_lab_bookings(api_client, &query).await {
                Ok(items) => {
                    let _ = set_bookings.try_set(items);
                    let _ = set_error.try_set(None);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.message()));
                }
            }
            let _ = set_is_loading.try_set(false);
        });
    };

    // initial load and reload on every search change
    Effect::new(move |_| load(search.get()));

    let update_status = move |id: String, next: BookingStatus| {
        // optimistic: flip the row locally, reconcile from the server on
        // failure
        set_bookings.update(|items| {
            if let Some(b) = items.iter_mut().find(|b| b.id == id) {
                b.status = next;
            }
        });
        spawn_local(async move {
            if let Err(e) = api::update_booking_status(api_client, &id, next).await {
                let _ = set_error.try_set(Some(format!(
                    "Failed to update booking status: {}",
                    e.message()
                )));
                match api::fetch_lab_bookings(api_client, &search.get_untracked()).await {
                    Ok(items) => {
                        let _ = set_bookings.try_set(items);
                    }
                    Err(e) => {
                        let _ = set_error.try_set(Some(e.message()));
                    }
                }
            }
        });
    };

    let rows = move || {
        bookings
            .get()
            .into_iter()
            .map(|b| {
                let status = b.status;
                let online = b.paid_online();
                let day = b
                    .date
                    .as_deref()
                    .map(format_day)
                    .unwrap_or_else(|| "-".to_string());
                let price = b
                    .price
                    .map(|p| format!("Rs. {p}"))
                    .unwrap_or_else(|| "—".to_string());
                let complete_id = b.id.clone();
                let cancel_id = b.id.clone();
                view! {
                    <tr>
                        <td>{day}</td>
                        <td>{b.patient_name.clone()}</td>
                        <td>{b.test_name.clone()}</td>
                        <td>{price}</td>
                        <td>
                            {if online {
                                view! { <span class="text-green">"Online"</span> }
                            } else {
                                view! { <span class="text-orange">"Pay @ Center"</span> }
                            }}
                        </td>
                        <td>
                            <span class=status_class(status)>{status.as_str()}</span>
                        </td>
                        <td>
                            <Show when=move || status != BookingStatus::Completed>
                                <button
                                    class="mini-btn green"
                                    on:click={
                                        let id = complete_id.clone();
                                        move |_| update_status(id.clone(), BookingStatus::Completed)
                                    }
                                >
                                    "Complete"
                                </button>
                            </Show>
                            <Show when=move || status != BookingStatus::Cancelled>
                                <button
                                    class="mini-btn red"
                                    on:click={
                                        let id = cancel_id.clone();
                                        move |_| update_status(id.clone(), BookingStatus::Cancelled)
                                    }
                                >
                                    "Cancel"
                                </button>
                            </Show>
                            {b.report_url.clone().map(|url| view! {
                                <a href=url target="_blank" rel="noopener noreferrer" class="mini-link">
                                    "View report"
                                </a>
                            })}
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <main class="hc-main">
            <h2 class="hc-title">"Bookings"</h2>

            <div class="hc-toolbar">
                <input
                    type="text"
                    placeholder="Search by patient/test..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            <Show when=move || error.get().is_some()>
                <div class="alert error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class="hc-table-wrap">
                <table class="hc-table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Patient"</th>
                            <th>"Test"</th>
                            <th>"Price"</th>
                            <th>"Payment"</th>
                            <th>"Status"</th>
                            <th>"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || !is_loading.get()
                            fallback=|| view! {
                                <tr><td colspan="7" class="text-center">"Loading..."</td></tr>
                            }
                        >
                            <Show
                                when=move || !bookings.with(Vec::is_empty)
                                fallback=|| view! {
                                    <tr><td colspan="7" class="text-center">"No bookings found"</td></tr>
                                }
                            >
                                {rows}
                            </Show>
                        </Show>
                    </tbody>
                </table>
            </div>
        </main>
    }
}
