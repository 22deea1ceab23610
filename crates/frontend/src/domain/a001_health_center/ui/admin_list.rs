use contracts::domain::centers::{Center, CenterTest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::api;
use crate::layout::{Footer, Navbar, Sidebar};
use crate::shared::http::use_api;

const PROVINCES: [&str; 9] = [
    "Western",
    "Central",
    "Southern",
    "Northern",
    "Eastern",
    "North Western",
    "North Central",
    "Uva",
    "Sabaragamuwa",
];

fn matches_filters(center: &Center, query: &str, province: &str) -> bool {
    let query = query.trim().to_lowercase();
    if !query.is_empty() {
        let city = center
            .address
            .as_ref()
            .and_then(|a| a.city.as_deref())
            .unwrap_or("");
        let hit = center.name.to_lowercase().contains(&query)
            || city.to_lowercase().contains(&query);
        if !hit {
            return false;
        }
    }
    if !province.is_empty() {
        let center_province = center
            .address
            .as_ref()
            .and_then(|a| a.province.as_deref())
            .unwrap_or("");
        if !center_province.eq_ignore_ascii_case(province) {
            return false;
        }
    }
    true
}

fn provinces_covered(centers: &[Center]) -> usize {
    let mut provinces: Vec<String> = centers
        .iter()
        .filter_map(|c| c.address.as_ref().and_then(|a| a.province.clone()))
        .map(|p| p.to_lowercase())
        .collect();
    provinces.sort();
    provinces.dedup();
    provinces.len()
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Admin-side overview of every registered center, with name/city search,
/// a province filter and a lazily loaded test list per center.
#[component]
pub fn CentersPage() -> impl IntoView {
    let api_client = use_api();

    let (centers, set_centers) = signal(Vec::<Center>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (query, set_query) = signal(String::new());
    let (province, set_province) = signal(String::new());
    let (expanded, set_expanded) = signal(Option::<String>::None);
    let (expanded_tests, set_expanded_tests) = signal(Vec::<CenterTest>::new());
    let (tests_loading, set_tests_loading) = signal(false);

    spawn_local(async move {
        match api::fetch_centers(api_client).await {
            Ok(items) => {
                let _ = set_centers.try_set(items);
            }
            Err(e) => {
                let _ = set_error.try_set(Some(e.message()));
            }
        }
        let _ = set_is_loading.try_set(false);
    });

    let toggle_tests = move |center_id: String| {
        if expanded.get_untracked().as_deref() == Some(center_id.as_str()) {
            set_expanded.set(None);
            set_expanded_tests.set(Vec::new());
            return;
        }
        set_expanded.set(Some(center_id.clone()));
        set_expanded_tests.set(Vec::new());
        set_tests_loading.set(true);
        spawn_local(async move {
            match api::fetch_center_tests(api_client, &center_id).await {
                Ok(items) => {
                    // stale answer if the user already expanded another center
                    if expanded.get_untracked().as_deref() == Some(center_id.as_str()) {
                        let _ = set_expanded_tests.try_set(items);
                    }
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.message()));
                }
            }
            let _ = set_tests_loading.try_set(false);
        });
    };

    let delete_center = move |center_id: String| {
        if !confirm("Delete this center? This cannot be undone.") {
            return;
        }
        spawn_local(async move {
            match api::delete_center(api_client, &center_id).await {
                Ok(()) => {
                    let _ = set_centers.try_update(|items| {
                        items.retain(|c| c.id != center_id);
                    });
                }
                Err(e) => {
                    let _ = set_error
                        .try_set(Some(format!("Failed to delete center: {}", e.message())));
                }
            }
        });
    };

    let visible = move || {
        let query = query.get();
        let province = province.get();
        centers
            .get()
            .into_iter()
            .filter(|c| matches_filters(c, &query, &province))
            .collect::<Vec<_>>()
    };

    let cards = move || {
        visible()
            .into_iter()
            .map(|c| {
                let id = c.id.clone();
                let toggle_id = id.clone();
                let delete_id = id.clone();
                let address = c.address.clone().unwrap_or_default();
                let place = [address.city, address.district, address.province]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(", ");
                let phone = c
                    .contact
                    .as_ref()
                    .and_then(|ct| ct.phone.clone())
                    .unwrap_or_else(|| "N/A".to_string());
                let is_open = move || expanded.get().as_deref() == Some(id.as_str());
                view! {
                    <div class="center-card">
                        <div class="center-card-head">
                            <h3>{c.name.clone()}</h3>
                            <button
                                class="btn btn-danger"
                                on:click={
                                    let id = delete_id.clone();
                                    move |_| delete_center(id.clone())
                                }
                            >
                                "Delete"
                            </button>
                        </div>
                        <p class="muted">{place}</p>
                        <p class="muted">{phone}</p>
                        <button
                            class="btn"
                            on:click={
                                let id = toggle_id.clone();
                                move |_| toggle_tests(id.clone())
                            }
                        >
                            {
                                let is_open = is_open.clone();
                                move || if is_open() { "Hide tests" } else { "Show tests" }
                            }
                        </button>

                        <Show when=is_open.clone()>
                            <div class="center-card-tests">
                                <Show
                                    when=move || !tests_loading.get()
                                    fallback=|| view! { <p class="muted">"Loading tests…"</p> }
                                >
                                    <Show
                                        when=move || !expanded_tests.with(Vec::is_empty)
                                        fallback=|| view! {
                                            <p class="muted">"No tests for this center."</p>
                                        }
                                    >
                                        <ul>
                                            {move || expanded_tests
                                                .get()
                                                .into_iter()
                                                .map(|t| {
                                                    let price = t
                                                        .price
                                                        .map(|p| format!("Rs {p}"))
                                                        .unwrap_or_else(|| "—".to_string());
                                                    view! {
                                                        <li>{t.name.clone()} " · " {price}</li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
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
                    <h2>"Health Centers"</h2>

                    <div class="stats-row">
                        <div class="stat-card">
                            <span class="stat-number">{move || centers.with(Vec::len)}</span>
                            <span class="stat-label">"Registered centers"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-number">{move || provinces_covered(&centers.get())}</span>
                            <span class="stat-label">"Provinces covered"</span>
                        </div>
                    </div>

                    <div class="toolbar">
                        <input
                            type="text"
                            placeholder="Search by name or city..."
                            prop:value=move || query.get()
                            on:input=move |ev| set_query.set(event_target_value(&ev))
                        />
                        <select
                            prop:value=move || province.get()
                            on:change=move |ev| set_province.set(event_target_value(&ev))
                        >
                            <option value="">"All provinces"</option>
                            {PROVINCES
                                .iter()
                                .map(|p| view! { <option value=*p>{*p}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <Show when=move || error.get().is_some()>
                        <div class="alert error">{move || error.get().unwrap_or_default()}</div>
                    </Show>

                    <Show
                        when=move || !is_loading.get()
                        fallback=|| view! { <p class="muted">"Loading centers…"</p> }
                    >
                        <Show
                            when=move || !visible().is_empty()
                            fallback=|| view! { <p class="muted">"No centers found."</p> }
                        >
                            <div class="center-card-grid">{cards}</div>
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
    use contracts::domain::centers::Address;

    fn center(name: &str, city: &str, province: &str) -> Center {
        Center {
            id: "C1".to_string(),
            name: name.to_string(),
            address: Some(Address {
                line1: None,
                city: Some(city.to_string()),
                district: None,
                province: Some(province.to_string()),
            }),
            contact: None,
            email: None,
            location: None,
        }
    }

    #[test]
    fn search_matches_name_or_city_case_insensitively() {
        let c = center("Colombo Lab", "Colombo", "Western");
        assert!(matches_filters(&c, "colombo", ""));
        assert!(matches_filters(&c, "LAB", ""));
        assert!(!matches_filters(&c, "kandy", ""));
    }

    #[test]
    fn province_filter_is_exact_but_case_insensitive() {
        let c = center("Colombo Lab", "Colombo", "Western");
        assert!(matches_filters(&c, "", "western"));
        assert!(!matches_filters(&c, "", "Uva"));
    }

    #[test]
    fn province_count_dedupes_case_insensitively() {
        let centers = vec![
            center("A", "Colombo", "Western"),
            center("B", "Gampaha", "western"),
            center("C", "Kandy", "Central"),
        ];
        assert_eq!(provinces_covered(&centers), 2);
        assert_eq!(provinces_covered(&[]), 0);
    }

    #[test]
    fn empty_filters_match_everything() {
        let c = Center {
            id: "C2".to_string(),
            name: "Bare".to_string(),
            address: None,
            contact: None,
            email: None,
            location: None,
        };
        assert!(matches_filters(&c, "", ""));
        assert!(!matches_filters(&c, "", "Western"));
    }
}
