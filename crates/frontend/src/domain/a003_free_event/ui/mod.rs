use chrono::NaiveDate;
use contracts::domain::centers::CenterName;
use contracts::domain::events::{
    order_for_display, parse_event_date, EventPayload, EventRegistration, FreeEvent,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::layout::{Footer, Navbar, Sidebar};
use crate::shared::http::use_api;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn browser_today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Client-side list filters: name substring, exact location, date range.
/// Range bounds are inclusive and optional; undated events only survive an
/// empty range.
fn passes_filters(
    event: &FreeEvent,
    name_query: &str,
    location: &str,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> bool {
    let name_query = name_query.trim().to_lowercase();
    if !name_query.is_empty() && !event.name.to_lowercase().contains(&name_query) {
        return false;
    }
    if !location.is_empty() && event.location.as_deref() != Some(location) {
        return false;
    }
    if from.is_some() || to.is_some() {
        let Some(day) = event.day() else {
            return false;
        };
        if from.map(|f| day < f).unwrap_or(false) || to.map(|t| day > t).unwrap_or(false) {
            return false;
        }
    }
    true
}

#[derive(Clone, Copy)]
struct EventForm {
    name: RwSignal<String>,
    description: RwSignal<String>,
    date: RwSignal<String>,
    time: RwSignal<String>,
    location: RwSignal<String>,
    slots_total: RwSignal<String>,
}

impl EventForm {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            date: RwSignal::new(String::new()),
            time: RwSignal::new(String::new()),
            location: RwSignal::new(String::new()),
            slots_total: RwSignal::new(String::new()),
        }
    }

    fn populate(&self, event: &FreeEvent) {
        self.name.set(event.name.clone());
        self.description
            .set(event.description.clone().unwrap_or_default());
        self.date.set(
            event
                .date
                .as_deref()
                .and_then(|d| d.get(..10))
                .unwrap_or_default()
                .to_string(),
        );
        self.time.set(event.time.clone().unwrap_or_default());
        self.location.set(event.location.clone().unwrap_or_default());
        self.slots_total.set(
            event
                .slots_total
                .map(|v| v.to_string())
                .unwrap_or_default(),
        );
    }

    fn clear(&self) {
        self.name.set(String::new());
        self.description.set(String::new());
        self.date.set(String::new());
        self.time.set(String::new());
        self.location.set(String::new());
        self.slots_total.set(String::new());
    }

    fn to_payload(self) -> EventPayload {
        EventPayload {
            name: self.name.get_untracked().trim().to_string(),
            description: self.description.get_untracked().trim().to_string(),
            date: self.date.get_untracked().trim().to_string(),
            time: self.time.get_untracked().trim().to_string(),
            location: self.location.get_untracked(),
            slots_total: self.slots_total.get_untracked().trim().to_string(),
        }
    }
}

/// Free screening events: create/edit form, filtered list in display order
/// and a per-event registrations panel.
#[component]
pub fn FreeEventsPage() -> impl IntoView {
    let api_client = use_api();
    let today = browser_today();

    let (events, set_events) = signal(Vec::<FreeEvent>::new());
    let (center_names, set_center_names) = signal(Vec::<CenterName>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let form = EventForm::new();
    let (editing_id, set_editing_id) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let (filter_name, set_filter_name) = signal(String::new());
    let (filter_location, set_filter_location) = signal(String::new());
    let (filter_from, set_filter_from) = signal(String::new());
    let (filter_to, set_filter_to) = signal(String::new());

    let (viewing_id, set_viewing_id) = signal(Option::<String>::None);
    let (registrations, set_registrations) = signal(Vec::<EventRegistration>::new());
    let (regs_loading, set_regs_loading) = signal(false);

    let load_events = move || {
        spawn_local(async move {
            match api::fetch_events(api_client).await {
                Ok(items) => {
                    let _ = set_events.try_set(items);
                    let _ = set_error.try_set(None);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.message()));
                }
            }
            let _ = set_is_loading.try_set(false);
        });
    };
    load_events();

    spawn_local(async move {
        if let Ok(names) = api::fetch_center_names(api_client).await {
            let _ = set_center_names.try_set(names);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let payload = form.to_payload();
        if payload.name.is_empty() || payload.date.is_empty() {
            set_error.set(Some("Event name and date are required.".to_string()));
            return;
        }

        set_is_saving.set(true);
        spawn_local(async move {
            let result = match editing_id.get_untracked() {
                Some(id) => api::update_event(api_client, &id, &payload).await,
                None => api::create_event(api_client, &payload).await,
            };
            match result {
                Ok(_) => {
                    form.clear();
                    let _ = set_editing_id.try_set(None);
                    load_events();
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.message()));
                }
            }
            let _ = set_is_saving.try_set(false);
        });
    };

    let start_edit = move |event: &FreeEvent| {
        form.populate(event);
        set_editing_id.set(Some(event.id.clone()));
    };
    let cancel_edit = move || {
        form.clear();
        set_editing_id.set(None);
    };

    let delete = move |id: String| {
        if !confirm("Delete this event?") {
            return;
        }
        spawn_local(async move {
            match api::delete_event(api_client, &id).await {
                Ok(()) => {
                    let _ = set_events.try_update(|items| items.retain(|e| e.id != id));
                    if viewing_id.get_untracked().as_deref() == Some(id.as_str()) {
                        let _ = set_viewing_id.try_set(None);
                    }
                }
                Err(e) => {
                    let _ =
                        set_error.try_set(Some(format!("Failed to delete event: {}", e.message())));
                }
            }
        });
    };

    let show_registrations = move |id: String| {
        if viewing_id.get_untracked().as_deref() == Some(id.as_str()) {
            set_viewing_id.set(None);
            set_registrations.set(Vec::new());
            return;
        }
        set_viewing_id.set(Some(id.clone()));
        set_registrations.set(Vec::new());
        set_regs_loading.set(true);
        spawn_local(async move {
            match api::fetch_registrations(api_client, &id).await {
                Ok(items) => {
                    if viewing_id.get_untracked().as_deref() == Some(id.as_str()) {
                        let _ = set_registrations.try_set(items);
                    }
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.message()));
                }
            }
            let _ = set_regs_loading.try_set(false);
        });
    };

    let visible = move || {
        let name_query = filter_name.get();
        let location = filter_location.get();
        let from = parse_event_date(&filter_from.get());
        let to = parse_event_date(&filter_to.get());
        let filtered = events
            .get()
            .into_iter()
            .filter(|e| passes_filters(e, &name_query, &location, from, to))
            .collect::<Vec<_>>();
        order_for_display(filtered, today)
    };

    let event_cards = move || {
        visible()
            .into_iter()
            .map(|event| {
                let edit_target = event.clone();
                let delete_id = event.id.clone();
                let regs_id = event.id.clone();
                let card_id = event.id.clone();
                let upcoming = event.day().map(|d| d >= today).unwrap_or(false);
                let day = event
                    .date
                    .as_deref()
                    .and_then(|d| d.get(..10))
                    .unwrap_or("No date")
                    .to_string();
                let viewing = move || viewing_id.get().as_deref() == Some(card_id.as_str());
                view! {
                    <div class=if upcoming { "event-card upcoming" } else { "event-card past" }>
                        <div class="event-card-head">
                            <h3>{event.name.clone()}</h3>
                            <span class=if upcoming { "tag green" } else { "tag" }>
                                {if upcoming { "Upcoming" } else { "Past" }}
                            </span>
                        </div>
                        <p class="muted">
                            {day} {event.time.clone().map(|t| format!(" · {t}")).unwrap_or_default()}
                        </p>
                        <p class="muted">{event.location.clone().unwrap_or_default()}</p>
                        {event.description.clone().map(|d| view! { <p>{d}</p> })}
                        {event
                            .slots_total
                            .map(|n| view! { <p class="muted">{format!("{n} slots")}</p> })}

                        <div class="card-actions">
                            <button
                                class="btn"
                                on:click={
                                    let e = edit_target.clone();
                                    move |_| start_edit(&e)
                                }
                            >
                                "Edit"
                            </button>
                            <button
                                class="btn btn-danger"
                                on:click={
                                    let id = delete_id.clone();
                                    move |_| delete(id.clone())
                                }
                            >
                                "Delete"
                            </button>
                            <button
                                class="btn"
                                on:click={
                                    let id = regs_id.clone();
                                    move |_| show_registrations(id.clone())
                                }
                            >
                                {
                                    let viewing = viewing.clone();
                                    move || if viewing() {
                                        "Hide registrations"
                                    } else {
                                        "Registrations"
                                    }
                                }
                            </button>
                        </div>

                        <Show when=viewing.clone()>
                            <div class="event-registrations">
                                <Show
                                    when=move || !regs_loading.get()
                                    fallback=|| view! { <p class="muted">"Loading…"</p> }
                                >
                                    <Show
                                        when=move || !registrations.with(Vec::is_empty)
                                        fallback=|| view! {
                                            <p class="muted">"No registrations yet."</p>
                                        }
                                    >
                                        <table class="regs-table">
                                            <thead>
                                                <tr>
                                                    <th>"Name"</th>
                                                    <th>"NIC"</th>
                                                    <th>"Contact"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {move || registrations
                                                    .get()
                                                    .into_iter()
                                                    .map(|r| view! {
                                                        <tr>
                                                            <td>{r.name.clone()}</td>
                                                            <td>{r.nic.clone().unwrap_or_default()}</td>
                                                            <td>{r.contact_no.clone().unwrap_or_default()}</td>
                                                        </tr>
                                                    })
                                                    .collect_view()}
                                            </tbody>
                                        </table>
                                    </Show>
                                </Show>
                            </div>
                        </Show>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="layout">
            <Navbar />
            <div class="content">
                <Sidebar />
                <main>
                    <h2>"Free Health Events"</h2>

                    <Show when=move || error.get().is_some()>
                        <div class="alert error">{move || error.get().unwrap_or_default()}</div>
                    </Show>

                    <form class="event-form" on:submit=on_submit>
                        <h3>
                            {move || if editing_id.get().is_some() {
                                "Edit event"
                            } else {
                                "New event"
                            }}
                        </h3>
                        <input
                            placeholder="Event name"
                            prop:value=move || form.name.get()
                            on:input=move |ev| form.name.set(event_target_value(&ev))
                        />
                        <textarea
                            rows="3"
                            placeholder="Description"
                            prop:value=move || form.description.get()
                            on:input=move |ev| form.description.set(event_target_value(&ev))
                        ></textarea>
                        <input
                            type="date"
                            prop:value=move || form.date.get()
                            on:input=move |ev| form.date.set(event_target_value(&ev))
                        />
                        <input
                            type="time"
                            prop:value=move || form.time.get()
                            on:input=move |ev| form.time.set(event_target_value(&ev))
                        />
                        <select
                            prop:value=move || form.location.get()
                            on:change=move |ev| form.location.set(event_target_value(&ev))
                        >
                            <option value="">"Select location"</option>
                            {move || center_names
                                .get()
                                .into_iter()
                                .map(|c| {
                                    let value = c.name.clone();
                                    view! { <option value=value>{c.name}</option> }
                                })
                                .collect_view()}
                        </select>
                        <input
                            type="number"
                            placeholder="Total slots"
                            prop:value=move || form.slots_total.get()
                            on:input=move |ev| form.slots_total.set(event_target_value(&ev))
                        />
                        <div class="card-actions">
                            <button
                                class="btn btn-primary"
                                type="submit"
                                disabled=move || is_saving.get()
                            >
                                {move || match (is_saving.get(), editing_id.get().is_some()) {
                                    (true, _) => "Saving...",
                                    (false, true) => "Update event",
                                    (false, false) => "Create event",
                                }}
                            </button>
                            <Show when=move || editing_id.get().is_some()>
                                <button class="btn" type="button" on:click=move |_| cancel_edit()>
                                    "Cancel edit"
                                </button>
                            </Show>
                        </div>
                    </form>

                    <div class="toolbar">
                        <input
                            type="text"
                            placeholder="Search events..."
                            prop:value=move || filter_name.get()
                            on:input=move |ev| set_filter_name.set(event_target_value(&ev))
                        />
                        <select
                            prop:value=move || filter_location.get()
                            on:change=move |ev| set_filter_location.set(event_target_value(&ev))
                        >
                            <option value="">"All locations"</option>
                            {move || center_names
                                .get()
                                .into_iter()
                                .map(|c| {
                                    let value = c.name.clone();
                                    view! { <option value=value>{c.name}</option> }
                                })
                                .collect_view()}
                        </select>
                        <input
                            type="date"
                            prop:value=move || filter_from.get()
                            on:input=move |ev| set_filter_from.set(event_target_value(&ev))
                        />
                        <input
                            type="date"
                            prop:value=move || filter_to.get()
                            on:input=move |ev| set_filter_to.set(event_target_value(&ev))
                        />
                    </div>

                    <Show
                        when=move || !is_loading.get()
                        fallback=|| view! { <p class="muted">"Loading events…"</p> }
                    >
                        <Show
                            when=move || !visible().is_empty()
                            fallback=|| view! { <p class="muted">"No events match."</p> }
                        >
                            <div class="event-card-grid">{event_cards}</div>
                        </Show>
                    </Show>

                    <Footer />
                </main>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(name: &str, date: Option<&str>, location: Option<&str>) -> FreeEvent {
        FreeEvent {
            id: "E1".to_string(),
            name: name.to_string(),
            description: None,
            date: date.map(Into::into),
            time: None,
            location: location.map(Into::into),
            slots_total: None,
        }
    }

    #[test]
    fn name_filter_is_a_case_insensitive_substring() {
        let e = event("Blood Donation Camp", Some("2025-06-01"), None);
        assert!(passes_filters(&e, "blood", "", None, None));
        assert!(passes_filters(&e, "  CAMP ", "", None, None));
        assert!(!passes_filters(&e, "dental", "", None, None));
    }

    #[test]
    fn location_filter_is_exact() {
        let e = event("Camp", Some("2025-06-01"), Some("Colombo Lab"));
        assert!(passes_filters(&e, "", "Colombo Lab", None, None));
        assert!(!passes_filters(&e, "", "Kandy Lab", None, None));
    }

    #[test]
    fn date_range_bounds_are_inclusive_and_undated_events_drop_out() {
        let e = event("Camp", Some("2025-06-15"), None);
        let day = NaiveDate::from_ymd_opt(2025, 6, 15);
        assert!(passes_filters(&e, "", "", day, day));
        assert!(!passes_filters(
            &e,
            "",
            "",
            NaiveDate::from_ymd_opt(2025, 6, 16),
            None
        ));
        let undated = event("Camp", None, None);
        assert!(passes_filters(&undated, "", "", None, None));
        assert!(!passes_filters(&undated, "", "", day, None));
    }
}
