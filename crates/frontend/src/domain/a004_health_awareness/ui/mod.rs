use contracts::domain::awareness::{AwarenessItem, AwarenessKind, AwarenessPayload, Severity};
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

/// Date inputs take the bare day; stored values may be full timestamps.
fn date_input_value(raw: &str) -> String {
    raw.get(..10).unwrap_or(raw).to_string()
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Clone, Copy)]
struct AwarenessForm {
    title: RwSignal<String>,
    summary: RwSignal<String>,
    description: RwSignal<String>,
    category: RwSignal<String>,
    region: RwSignal<String>,
    kind: RwSignal<String>,
    severity: RwSignal<String>,
    media_url: RwSignal<String>,
    active_from: RwSignal<String>,
    active_to: RwSignal<String>,
}

impl AwarenessForm {
    fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            summary: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            region: RwSignal::new(String::new()),
            kind: RwSignal::new("article".to_string()),
            severity: RwSignal::new("info".to_string()),
            media_url: RwSignal::new(String::new()),
            active_from: RwSignal::new(String::new()),
            active_to: RwSignal::new(String::new()),
        }
    }

    fn populate(&self, item: &AwarenessItem) {
        self.title.set(item.title.clone());
        self.summary.set(item.summary.clone().unwrap_or_default());
        self.description
            .set(item.description.clone().unwrap_or_default());
        self.category.set(item.category.clone().unwrap_or_default());
        self.region.set(item.region.clone().unwrap_or_default());
        self.kind.set(item.kind.as_str().to_string());
        self.severity.set(item.severity.as_str().to_string());
        self.media_url.set(item.media_url.clone().unwrap_or_default());
        self.active_from.set(
            item.active_from
                .as_deref()
                .map(date_input_value)
                .unwrap_or_default(),
        );
        self.active_to.set(
            item.active_to
                .as_deref()
                .map(date_input_value)
                .unwrap_or_default(),
        );
    }

    fn clear(&self) {
        self.title.set(String::new());
        self.summary.set(String::new());
        self.description.set(String::new());
        self.category.set(String::new());
        self.region.set(String::new());
        self.kind.set("article".to_string());
        self.severity.set("info".to_string());
        self.media_url.set(String::new());
        self.active_from.set(String::new());
        self.active_to.set(String::new());
    }

    fn to_payload(self) -> AwarenessPayload {
        AwarenessPayload {
            title: self.title.get_untracked().trim().to_string(),
            summary: optional(&self.summary.get_untracked()),
            description: optional(&self.description.get_untracked()),
            category: optional(&self.category.get_untracked()),
            region: optional(&self.region.get_untracked()),
            kind: AwarenessKind::parse(&self.kind.get_untracked()),
            severity: Severity::parse(&self.severity.get_untracked()),
            media_url: optional(&self.media_url.get_untracked()),
            active_from: optional(&self.active_from.get_untracked()),
            active_to: optional(&self.active_to.get_untracked()),
        }
    }
}

/// Health awareness records: create/edit form over the table of all
/// records. Edit loads the row into the form; saves and deletes refetch.
#[component]
pub fn HealthAwarenessPage() -> impl IntoView {
    let api_client = use_api();

    let (items, set_items) = signal(Vec::<AwarenessItem>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let form = AwarenessForm::new();
    let (editing_id, set_editing_id) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let load = move || {
        spawn_local(async move {
            match api::fetch_items(api_client).await {
                Ok(records) => {
                    let _ = set_items.try_set(records);
                    let _ = set_error.try_set(None);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.message()));
                }
            }
            let _ = set_is_loading.try_set(false);
        });
    };
    load();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let payload = form.to_payload();
        if payload.title.is_empty() {
            set_error.set(Some("Title is required.".to_string()));
            return;
        }

        set_is_saving.set(true);
        spawn_local(async move {
            let result = match editing_id.get_untracked() {
                Some(id) => api::update_item(api_client, &id, &payload).await,
                None => api::create_item(api_client, &payload).await,
            };
            match result {
                Ok(_) => {
                    form.clear();
                    let _ = set_editing_id.try_set(None);
                    load();
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.message()));
                }
            }
            let _ = set_is_saving.try_set(false);
        });
    };

    let start_edit = move |item: &AwarenessItem| {
        form.populate(item);
        set_editing_id.set(Some(item.id.clone()));
    };
    let cancel_edit = move || {
        form.clear();
        set_editing_id.set(None);
    };

    let delete = move |id: String| {
        if !confirm("Are you sure you want to delete this item?") {
            return;
        }
        spawn_local(async move {
            match api::delete_item(api_client, &id).await {
                Ok(()) => load(),
                Err(e) => {
                    let _ = set_error
                        .try_set(Some(format!("Failed to delete record: {}", e.message())));
                }
            }
        });
    };

    let rows = move || {
        items
            .get()
            .into_iter()
            .map(|item| {
                let edit_target = item.clone();
                let delete_id = item.id.clone();
                let from = item
                    .active_from
                    .as_deref()
                    .map(date_input_value)
                    .unwrap_or_else(|| "-".to_string());
                let to = item
                    .active_to
                    .as_deref()
                    .map(date_input_value)
                    .unwrap_or_else(|| "-".to_string());
                view! {
                    <tr>
                        <td>{item.title.clone()}</td>
                        <td>{item.category.clone().unwrap_or_default()}</td>
                        <td>{item.region.clone().unwrap_or_default()}</td>
                        <td>{item.kind.as_str()}</td>
                        <td>{item.severity.as_str()}</td>
                        <td>{from}</td>
                        <td>{to}</td>
                        <td>
                            <button
                                class="mini-btn"
                                on:click={
                                    let item = edit_target.clone();
                                    move |_| start_edit(&item)
                                }
                            >
                                "Edit"
                            </button>
                            <button
                                class="mini-btn red"
                                on:click={
                                    let id = delete_id.clone();
                                    move |_| delete(id.clone())
                                }
                            >
                                "Delete"
                            </button>
                        </td>
                    </tr>
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
                    <h2>"Health Awareness Management"</h2>

                    <Show when=move || error.get().is_some()>
                        <div class="alert error">{move || error.get().unwrap_or_default()}</div>
                    </Show>

                    <form class="awareness-form" on:submit=on_submit>
                        <div class="form-row">
                            <input
                                placeholder="Title"
                                prop:value=move || form.title.get()
                                on:input=move |ev| form.title.set(event_target_value(&ev))
                            />
                            <input
                                placeholder="Summary"
                                prop:value=move || form.summary.get()
                                on:input=move |ev| form.summary.set(event_target_value(&ev))
                            />
                        </div>
                        <textarea
                            rows="3"
                            placeholder="Description"
                            prop:value=move || form.description.get()
                            on:input=move |ev| form.description.set(event_target_value(&ev))
                        ></textarea>
                        <div class="form-row">
                            <input
                                placeholder="Category"
                                prop:value=move || form.category.get()
                                on:input=move |ev| form.category.set(event_target_value(&ev))
                            />
                            <input
                                placeholder="Region"
                                prop:value=move || form.region.get()
                                on:input=move |ev| form.region.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-row">
                            <select
                                prop:value=move || form.kind.get()
                                on:change=move |ev| form.kind.set(event_target_value(&ev))
                            >
                                <option value="article">"Article"</option>
                                <option value="video">"Video"</option>
                            </select>
                            <select
                                prop:value=move || form.severity.get()
                                on:change=move |ev| form.severity.set(event_target_value(&ev))
                            >
                                <option value="info">"Info"</option>
                                <option value="medium">"Medium"</option>
                                <option value="high">"High"</option>
                            </select>
                        </div>
                        <div class="form-row">
                            <input
                                type="date"
                                prop:value=move || form.active_from.get()
                                on:input=move |ev| form.active_from.set(event_target_value(&ev))
                            />
                            <input
                                type="date"
                                prop:value=move || form.active_to.get()
                                on:input=move |ev| form.active_to.set(event_target_value(&ev))
                            />
                        </div>
                        <input
                            placeholder="Media URL (optional)"
                            prop:value=move || form.media_url.get()
                            on:input=move |ev| form.media_url.set(event_target_value(&ev))
                        />

                        <div class="card-actions">
                            <button
                                class="btn btn-primary"
                                type="submit"
                                disabled=move || is_saving.get()
                            >
                                {move || match (is_saving.get(), editing_id.get().is_some()) {
                                    (true, _) => "Saving...",
                                    (false, true) => "Update",
                                    (false, false) => "Add New",
                                }}
                            </button>
                            <Show when=move || editing_id.get().is_some()>
                                <button class="btn" type="button" on:click=move |_| cancel_edit()>
                                    "Cancel edit"
                                </button>
                            </Show>
                        </div>
                    </form>

                    <h3>"All Awareness Records"</h3>
                    <div class="table-wrap">
                        <table class="records-table">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Category"</th>
                                    <th>"Region"</th>
                                    <th>"Type"</th>
                                    <th>"Severity"</th>
                                    <th>"Active From"</th>
                                    <th>"Active To"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show
                                    when=move || !is_loading.get()
                                    fallback=|| view! {
                                        <tr><td colspan="8" class="text-center">"Loading..."</td></tr>
                                    }
                                >
                                    <Show
                                        when=move || !items.with(Vec::is_empty)
                                        fallback=|| view! {
                                            <tr><td colspan="8" class="text-center">"No records yet."</td></tr>
                                        }
                                    >
                                        {rows}
                                    </Show>
                                </Show>
                            </tbody>
                        </table>
                    </div>

                    <Footer />
                </main>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_inputs_take_the_bare_day() {
        assert_eq!(date_input_value("2025-05-01T00:00:00.000Z"), "2025-05-01");
        assert_eq!(date_input_value("2025-05-01"), "2025-05-01");
        assert_eq!(date_input_value(""), "");
    }

    #[test]
    fn blank_optionals_drop_out_of_the_payload() {
        assert_eq!(optional("  "), None);
        assert_eq!(optional(" Outbreak "), Some("Outbreak".to_string()));
    }
}
