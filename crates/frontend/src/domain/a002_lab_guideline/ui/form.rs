use contracts::domain::guidelines::{
    ChecklistItem, GuidelineBody, GuidelinePayload, Translations,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

use super::super::api;
use crate::layout::{Footer, Navbar, Sidebar};
use crate::shared::http::use_api;

/// One list entry per non-blank line.
fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn join_lines(items: &[String]) -> String {
    items.join("\n")
}

/// Checklist entries, one per line; a leading `*` marks the item mandatory.
fn parse_checklist(text: &str) -> Vec<ChecklistItem> {
    split_lines(text)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let (label, mandatory) = match line.strip_prefix('*') {
                Some(rest) => (rest.trim().to_string(), true),
                None => (line, false),
            };
            ChecklistItem {
                key: format!("item-{}", i + 1),
                label,
                is_mandatory: mandatory,
            }
        })
        .collect()
}

fn checklist_text(items: &[ChecklistItem]) -> String {
    items
        .iter()
        .map(|item| {
            if item.is_mandatory {
                format!("* {}", item.label)
            } else {
                item.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Clone, Copy)]
struct BodyFields {
    name: RwSignal<String>,
    category: RwSignal<String>,
    what: RwSignal<String>,
    why: RwSignal<String>,
    preparation: RwSignal<String>,
    during: RwSignal<String>,
    after: RwSignal<String>,
    checklist: RwSignal<String>,
    media_url: RwSignal<String>,
}

impl BodyFields {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            what: RwSignal::new(String::new()),
            why: RwSignal::new(String::new()),
            preparation: RwSignal::new(String::new()),
            during: RwSignal::new(String::new()),
            after: RwSignal::new(String::new()),
            checklist: RwSignal::new(String::new()),
            media_url: RwSignal::new(String::new()),
        }
    }

    fn populate(&self, body: &GuidelineBody) {
        self.name.set(body.name.clone().unwrap_or_default());
        self.category.set(body.category.clone().unwrap_or_default());
        self.what.set(body.what.clone().unwrap_or_default());
        self.why.set(body.why.clone().unwrap_or_default());
        self.preparation.set(join_lines(&body.preparation));
        self.during.set(join_lines(&body.during));
        self.after.set(join_lines(&body.after));
        self.checklist.set(checklist_text(&body.checklist));
        self.media_url.set(body.media_url.clone().unwrap_or_default());
    }

    fn to_body(self) -> GuidelineBody {
        GuidelineBody {
            name: optional(&self.name.get_untracked()),
            category: optional(&self.category.get_untracked()),
            what: optional(&self.what.get_untracked()),
            why: optional(&self.why.get_untracked()),
            preparation: split_lines(&self.preparation.get_untracked()),
            during: split_lines(&self.during.get_untracked()),
            after: split_lines(&self.after.get_untracked()),
            checklist: parse_checklist(&self.checklist.get_untracked()),
            media_url: optional(&self.media_url.get_untracked()),
        }
    }

    fn is_blank(&self) -> bool {
        let b = self.to_body();
        b.name.is_none()
            && b.category.is_none()
            && b.what.is_none()
            && b.why.is_none()
            && b.preparation.is_empty()
            && b.during.is_empty()
            && b.after.is_empty()
            && b.checklist.is_empty()
            && b.media_url.is_none()
    }
}

#[component]
fn BodyEditor(fields: BodyFields) -> impl IntoView {
    let text_input = |label: &'static str, signal: RwSignal<String>| {
        view! {
            <label>
                {label}
                <input
                    prop:value=move || signal.get()
                    on:input=move |ev| signal.set(event_target_value(&ev))
                />
            </label>
        }
    };
    let text_area = |label: &'static str, hint: &'static str, signal: RwSignal<String>| {
        view! {
            <label>
                {label}
                <textarea
                    rows="4"
                    placeholder=hint
                    prop:value=move || signal.get()
                    on:input=move |ev| signal.set(event_target_value(&ev))
                ></textarea>
            </label>
        }
    };

    view! {
        {text_input("Name", fields.name)}
        {text_input("Category", fields.category)}
        {text_area("What is this test?", "", fields.what)}
        {text_area("Why is it done?", "", fields.why)}
        {text_area("Preparation", "One instruction per line", fields.preparation)}
        {text_area("During the test", "One instruction per line", fields.during)}
        {text_area("After the test", "One instruction per line", fields.after)}
        {text_area(
            "Checklist",
            "One item per line, start with * for mandatory items",
            fields.checklist,
        )}
        {text_input("Media URL", fields.media_url)}
    }
}

/// Create and edit form for guidelines. With an `:id` route param the form
/// loads and updates that record, otherwise submit creates a new one.
#[component]
pub fn GuidelineFormPage() -> impl IntoView {
    let api_client = use_api();
    let params = use_params_map();
    let navigate = use_navigate();

    let english = BodyFields::new();
    let sinhala = BodyFields::new();
    let (with_sinhala, set_with_sinhala) = signal(false);
    let (editing_id, set_editing_id) = signal(Option::<String>::None);
    let (error, set_error) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    Effect::new(move |_| {
        let Some(id) = params.get().get("id") else {
            return;
        };
        spawn_local(async move {
            match api::fetch_guideline(api_client, &id).await {
                Ok(g) => {
                    english.populate(&g.body);
                    if let Some(si) = g.translations.as_ref().and_then(|t| t.si.as_ref()) {
                        sinhala.populate(si);
                        let _ = set_with_sinhala.try_set(true);
                    }
                    let _ = set_editing_id.try_set(Some(g.id));
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.message()));
                }
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let body = english.to_body();
        if body.name.is_none() {
            set_error.set(Some("Guideline name is required.".to_string()));
            return;
        }
        let translations = (with_sinhala.get_untracked() && !sinhala.is_blank()).then(|| {
            Translations {
                si: Some(sinhala.to_body()),
            }
        });
        let payload = GuidelinePayload { body, translations };

        set_is_saving.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match editing_id.get_untracked() {
                Some(id) => api::update_guideline(api_client, &id, &payload).await,
                None => api::create_guideline(api_client, &payload).await,
            };
            match result {
                Ok(_) => navigate("/guidelines", NavigateOptions::default()),
                Err(e) => {
                    let _ = set_error.try_set(Some(e.message()));
                    let _ = set_is_saving.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="layout">
            <Navbar />
            <div class="content">
                <Sidebar />
                <main>
                    <h2>
                        {move || if editing_id.get().is_some() {
                            "Edit Guideline"
                        } else {
                            "New Guideline"
                        }}
                    </h2>

                    <Show when=move || error.get().is_some()>
                        <div class="alert error">{move || error.get().unwrap_or_default()}</div>
                    </Show>

                    <form class="guide-form" on:submit=on_submit>
                        <BodyEditor fields=english />

                        <label class="inline">
                            <input
                                type="checkbox"
                                prop:checked=move || with_sinhala.get()
                                on:change=move |ev| {
                                    set_with_sinhala.set(event_target_checked(&ev))
                                }
                            />
                            "Add Sinhala translation"
                        </label>

                        <Show when=move || with_sinhala.get()>
                            <fieldset class="guide-translation">
                                <legend>"Sinhala"</legend>
                                <BodyEditor fields=sinhala />
                            </fieldset>
                        </Show>

                        <div class="card-actions">
                            <button
                                class="btn btn-primary"
                                type="submit"
                                disabled=move || is_saving.get()
                            >
                                {move || if is_saving.get() { "Saving..." } else { "Save" }}
                            </button>
                            <a href="/guidelines" class="btn">"Cancel"</a>
                        </div>
                    </form>

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
    fn blank_lines_are_dropped() {
        assert_eq!(
            split_lines("Fast 8 hours\n\n  Drink water  \n"),
            vec!["Fast 8 hours".to_string(), "Drink water".to_string()]
        );
    }

    #[test]
    fn star_prefix_marks_mandatory_items() {
        let items = parse_checklist("* Bring NIC\nWear loose clothing");
        assert_eq!(items.len(), 2);
        assert!(items[0].is_mandatory);
        assert_eq!(items[0].label, "Bring NIC");
        assert_eq!(items[0].key, "item-1");
        assert!(!items[1].is_mandatory);
    }

    #[test]
    fn checklist_round_trips_through_the_textarea_format() {
        let items = parse_checklist("* Bring NIC\nEat normally");
        assert_eq!(checklist_text(&items), "* Bring NIC\nEat normally");
    }
}
