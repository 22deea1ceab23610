use contracts::domain::centers::{CenterTest, ServiceOverrides};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::api;
use super::super::resolve::use_center;
use crate::shared::http::use_api;

/// "" clears an override, anything else must be a number.
fn parse_override(raw: &str) -> Result<Option<f64>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| format!("Not a number: {trimmed}"))
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Tests offered by the resolved center, with inline edit of the
/// per-service overrides and deactivation.
#[component]
pub fn CenterTestsPage() -> impl IntoView {
    let api_client = use_api();
    let center = use_center();

    let (tests, set_tests) = signal(Vec::<CenterTest>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (editing_id, set_editing_id) = signal(Option::<String>::None);
    let (price_input, set_price_input) = signal(String::new());
    let (capacity_input, set_capacity_input) = signal(String::new());
    let (daily_input, set_daily_input) = signal(String::new());

    Effect::new(move |_| {
        let Some(center) = center.get() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_center_tests(api_client, &center.id).await {
                Ok(items) => {
                    let _ = set_tests.try_set(items);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.message()));
                }
            }
            let _ = set_is_loading.try_set(false);
        });
    });

    let start_edit = move |t: &CenterTest| {
        set_editing_id.set(Some(t.center_service_id.clone()));
        set_price_input.set(t.price.map(|v| v.to_string()).unwrap_or_default());
        set_capacity_input.set(t.capacity.map(|v| v.to_string()).unwrap_or_default());
        set_daily_input.set(t.daily_count.map(|v| v.to_string()).unwrap_or_default());
    };

    let cancel_edit = move || {
        set_editing_id.set(None);
        set_price_input.set(String::new());
        set_capacity_input.set(String::new());
        set_daily_input.set(String::new());
    };

    let save_edit = move |service_id: String| {
        let parsed = parse_override(&price_input.get_untracked()).and_then(|price| {
            let capacity = parse_override(&capacity_input.get_untracked())?;
            let daily = parse_override(&daily_input.get_untracked())?;
            Ok(ServiceOverrides {
                price_override: price,
                capacity: capacity.map(|v| v as i64),
                daily_count: daily.map(|v| v as i64),
            })
        });
        let payload = match parsed {
            Ok(payload) => payload,
            Err(message) => {
                set_error.set(Some(message));
                return;
            }
        };
        spawn_local(async move {
            match api::update_service_overrides(api_client, &service_id, &payload).await {
                Ok(_) => {
                    let _ = set_tests.try_update(|items| {
                        if let Some(t) = items
                            .iter_mut()
                            .find(|t| t.center_service_id == service_id)
                        {
                            t.price = payload.price_override;
                            t.capacity = payload.capacity;
                            t.daily_count = payload.daily_count;
                        }
                    });
                    let _ = set_editing_id.try_set(None);
                    let _ = set_error.try_set(None);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(format!("Failed to save: {}", e.message())));
                }
            }
        });
    };

    let deactivate = move |service_id: String| {
        if !confirm("Remove this test from your center?") {
            return;
        }
        spawn_local(async move {
            match api::deactivate_service(api_client, &service_id).await {
                Ok(()) => {
                    let _ = set_tests.try_update(|items| {
                        items.retain(|t| t.center_service_id != service_id);
                    });
                }
                Err(e) => {
                    let _ =
                        set_error.try_set(Some(format!("Failed to remove test: {}", e.message())));
                }
            }
        });
    };

    let cards = move || {
        tests
            .get()
            .into_iter()
            .map(|t| {
                let service_id = t.center_service_id.clone();
                let edit_target = t.clone();
                let save_id = service_id.clone();
                let remove_id = service_id.clone();
                let is_editing = move || editing_id.get().as_deref() == Some(service_id.as_str());
                view! {
                    <div class="health-card">
                        <h3>{t.name.clone()}</h3>
                        <p class="muted">
                            {t.category.clone().unwrap_or_else(|| "General".to_string())}
                        </p>
                        <div class="service-facts">
                            <div>
                                <strong>"Price: "</strong>
                                {t.price.map(|v| format!("Rs {v}")).unwrap_or_else(|| "—".to_string())}
                            </div>
                            <div>
                                <strong>"Capacity: "</strong>
                                {t.capacity.map(|v| v.to_string()).unwrap_or_else(|| "—".to_string())}
                            </div>
                            <div>
                                <strong>"Daily count: "</strong>
                                {t.daily_count.map(|v| v.to_string()).unwrap_or_else(|| "—".to_string())}
                            </div>
                        </div>

                        <Show
                            when=is_editing.clone()
                            fallback={
                                let edit_target = edit_target.clone();
                                let remove_id = remove_id.clone();
                                move || view! {
                                    <div class="card-actions">
                                        <button
                                            class="btn btn-primary"
                                            on:click={
                                                let t = edit_target.clone();
                                                move |_| start_edit(&t)
                                            }
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn btn-danger"
                                            on:click={
                                                let id = remove_id.clone();
                                                move |_| deactivate(id.clone())
                                            }
                                        >
                                            "Remove"
                                        </button>
                                    </div>
                                }
                            }
                        >
                            <div class="card-edit">
                                <input
                                    placeholder="Price"
                                    prop:value=move || price_input.get()
                                    on:input=move |ev| set_price_input.set(event_target_value(&ev))
                                />
                                <input
                                    placeholder="Capacity"
                                    prop:value=move || capacity_input.get()
                                    on:input=move |ev| set_capacity_input.set(event_target_value(&ev))
                                />
                                <input
                                    placeholder="Daily count"
                                    prop:value=move || daily_input.get()
                                    on:input=move |ev| set_daily_input.set(event_target_value(&ev))
                                />
                                <div class="card-actions">
                                    <button
                                        class="btn btn-primary"
                                        on:click={
                                            let id = save_id.clone();
                                            move |_| save_edit(id.clone())
                                        }
                                    >
                                        "Save"
                                    </button>
                                    <button class="btn" on:click=move |_| cancel_edit()>
                                        "Cancel"
                                    </button>
                                </div>
                            </div>
                        </Show>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <main class="health-main">
            <h2>"Tests offered by this center"</h2>
            <p class="muted">"Manage the diagnostic tests your center provides."</p>

            <Show when=move || error.get().is_some()>
                <div class="alert error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <p class="muted">"Loading tests…"</p> }
            >
                <Show
                    when=move || !tests.with(Vec::is_empty)
                    fallback=|| view! { <p class="muted">"No tests attached to this center."</p> }
                >
                    <div class="health-center-cards">{cards}</div>
                </Show>
            </Show>
        </main>
    }
}

#[cfg(test)]
mod tests_mod {
    use super::parse_override;

    #[test]
    fn empty_clears_the_override() {
        assert_eq!(parse_override(""), Ok(None));
        assert_eq!(parse_override("   "), Ok(None));
    }

    #[test]
    fn numbers_parse_and_garbage_is_reported() {
        assert_eq!(parse_override("1500"), Ok(Some(1500.0)));
        assert_eq!(parse_override(" 12.5 "), Ok(Some(12.5)));
        assert!(parse_override("abc").is_err());
    }
}
