use contracts::domain::guidelines::{Guideline, GuidelineBody, Lang};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use super::super::api;
use crate::layout::{Footer, Navbar, Sidebar};
use crate::shared::http::use_api;

fn section(title: &'static str, items: Vec<String>) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <section class="guide-section">
                <h3>{title}</h3>
                <ul>
                    {items
                        .into_iter()
                        .map(|line| view! { <li>{line}</li> })
                        .collect_view()}
                </ul>
            </section>
        }
    })
}

/// Read-only guideline view with an English/Sinhala language switch.
#[component]
pub fn GuidelineDetailsPage() -> impl IntoView {
    let api_client = use_api();
    let params = use_params_map();

    let (guideline, set_guideline) = signal(Option::<Guideline>::None);
    let (error, set_error) = signal(Option::<String>::None);
    let (lang, set_lang) = signal(Lang::En);

    Effect::new(move |_| {
        let Some(id) = params.get().get("id") else {
            return;
        };
        spawn_local(async move {
            match api::fetch_guideline(api_client, &id).await {
                Ok(g) => {
                    let _ = set_guideline.try_set(Some(g));
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.message()));
                }
            }
        });
    });

    let body = move || {
        guideline
            .get()
            .map(|g| g.localized(lang.get()))
            .unwrap_or_default()
    };

    let content = move || {
        if let Some(message) = error.get() {
            return view! { <div class="alert error">{message}</div> }.into_any();
        }
        if guideline.with(Option::is_none) {
            return view! { <p class="muted">"Loading guideline…"</p> }.into_any();
        }
        let b: GuidelineBody = body();
        view! {
            <article class="guide-details">
                <div class="page-head">
                    <h2>{b.name.clone().unwrap_or_else(|| "Untitled".to_string())}</h2>
                    <div class="lang-switch">
                        <button
                            class=move || if lang.get() == Lang::En { "btn active" } else { "btn" }
                            on:click=move |_| set_lang.set(Lang::En)
                        >
                            "English"
                        </button>
                        <button
                            class=move || if lang.get() == Lang::Si { "btn active" } else { "btn" }
                            on:click=move |_| set_lang.set(Lang::Si)
                        >
                            "සිංහල"
                        </button>
                    </div>
                </div>
                <p class="muted">{b.category.clone().unwrap_or_default()}</p>

                {b.media_url.clone().map(|url| view! {
                    <img class="guide-media" src=url alt="Guideline illustration" />
                })}

                {b.what.clone().map(|text| view! {
                    <section class="guide-section">
                        <h3>"What is this test?"</h3>
                        <p>{text}</p>
                    </section>
                })}
                {b.why.clone().map(|text| view! {
                    <section class="guide-section">
                        <h3>"Why is it done?"</h3>
                        <p>{text}</p>
                    </section>
                })}

                {section("Preparation", b.preparation.clone())}
                {section("During the test", b.during.clone())}
                {section("After the test", b.after.clone())}

                {(!b.checklist.is_empty()).then(|| view! {
                    <section class="guide-section">
                        <h3>"Checklist"</h3>
                        <ul class="checklist">
                            {b.checklist
                                .iter()
                                .map(|item| {
                                    let mandatory = item.is_mandatory;
                                    view! {
                                        <li>
                                            <input type="checkbox" checked=mandatory disabled=true />
                                            {item.label.clone()}
                                            {mandatory.then(|| view! {
                                                <span class="tag">"Required"</span>
                                            })}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </section>
                })}

                <a href="/guidelines" class="btn">"Back to guidelines"</a>
            </article>
        }
        .into_any()
    };

    view! {
        <div class="layout">
            <Navbar />
            <div class="content">
                <Sidebar />
                <main>
                    {content}
                    <Footer />
                </main>
            </div>
        </div>
    }
}
