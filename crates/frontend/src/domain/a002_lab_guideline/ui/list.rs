use contracts::domain::guidelines::Guideline;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::api;
use crate::layout::{Footer, Navbar, Sidebar};
use crate::shared::http::use_api;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// All lab test guidelines with name/category search and delete. Deletes
/// refetch the list so the view always mirrors the server.
#[component]
pub fn GuidelinesPage() -> impl IntoView {
    let api_client = use_api();

    let (guidelines, set_guidelines) = signal(Vec::<Guideline>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (query, set_query) = signal(String::new());

    let load = move || {
        spawn_local(async move {
            match api::fetch_guidelines(api_client).await {
                Ok(items) => {
                    let _ = set_guidelines.try_set(items);
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

    let delete = move |id: String| {
        if !confirm("Delete this guideline?") {
            return;
        }
        spawn_local(async move {
            match api::delete_guideline(api_client, &id).await {
                Ok(()) => load(),
                Err(e) => {
                    let _ = set_error
                        .try_set(Some(format!("Failed to delete guideline: {}", e.message())));
                }
            }
        });
    };

    let visible = move || {
        let query = query.get();
        let query = query.trim();
        guidelines
            .get()
            .into_iter()
            .filter(|g| query.is_empty() || g.matches(query))
            .collect::<Vec<_>>()
    };

    let cards = move || {
        visible()
            .into_iter()
            .map(|g| {
                let details_href = format!("/guidelines/{}", g.id);
                let edit_href = format!("/guideline-form/{}", g.id);
                let delete_id = g.id.clone();
                let name = g
                    .body
                    .name
                    .clone()
                    .unwrap_or_else(|| "Untitled".to_string());
                let category = g
                    .body
                    .category
                    .clone()
                    .unwrap_or_else(|| "General".to_string());
                view! {
                    <div class="guide-card">
                        <h3>{name}</h3>
                        <p class="muted">{category}</p>
                        <div class="card-actions">
                            <a href=details_href class="btn">"View"</a>
                            <a href=edit_href class="btn">"Edit"</a>
                            <button
                                class="btn btn-danger"
                                on:click={
                                    let id = delete_id.clone();
                                    move |_| delete(id.clone())
                                }
                            >
                                "Delete"
                            </button>
                        </div>
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
                    <div class="page-head">
                        <h2>"Lab Test Guidelines"</h2>
                        <a href="/guideline-form" class="btn btn-primary">"New guideline"</a>
                    </div>

                    <div class="toolbar">
                        <input
                            type="text"
                            placeholder="Search by name or category..."
                            prop:value=move || query.get()
                            on:input=move |ev| set_query.set(event_target_value(&ev))
                        />
                    </div>

                    <Show when=move || error.get().is_some()>
                        <div class="alert error">{move || error.get().unwrap_or_default()}</div>
                    </Show>

                    <Show
                        when=move || !is_loading.get()
                        fallback=|| view! { <p class="muted">"Loading guidelines…"</p> }
                    >
                        <Show
                            when=move || !visible().is_empty()
                            fallback=|| view! { <p class="muted">"No guidelines found."</p> }
                        >
                            <div class="guide-card-grid">{cards}</div>
                        </Show>
                    </Show>

                    <Footer />
                </main>
            </div>
        </div>
    }
}
