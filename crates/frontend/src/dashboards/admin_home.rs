use leptos::prelude::*;

use crate::layout::{Footer, Navbar, Sidebar};
use crate::shared::calendar::{day_cells, month_title, next_month, prev_month, WEEKDAYS};
use crate::shared::clock::LiveClock;
use crate::system::auth::context::use_session;

#[component]
pub fn AdminHomePage() -> impl IntoView {
    let session = use_session();
    let display_name = move || {
        session
            .user()
            .map(|u| u.name)
            .unwrap_or_else(|| "Admin".to_string())
    };

    // browser-local today; month() is zero-based in JS
    let now = js_sys::Date::new_0();
    let today = (
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    );
    let (shown, set_shown) = signal((today.0, today.1));

    let shift_month = move |back: bool| {
        set_shown.update(|ym| {
            *ym = if back {
                prev_month(ym.0, ym.1)
            } else {
                next_month(ym.0, ym.1)
            };
        })
    };
    let shift_year = move |back: bool| {
        set_shown.update(|ym| ym.0 += if back { -1 } else { 1 });
    };

    let cells = move || {
        let (y, m) = shown.get();
        let is_current = y == today.0 && m == today.1;
        day_cells(y, m)
            .into_iter()
            .map(|day| {
                let class = match day {
                    Some(d) if is_current && d == today.2 => "calendar-day today",
                    _ => "calendar-day",
                };
                view! {
                    <div class=class>
                        {day.map(|d| d.to_string()).unwrap_or_default()}
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
                    <div class="header-section">
                        <h2>{move || format!("Welcome, {}", display_name())}</h2>
                        <LiveClock />
                    </div>

                    <div class="grid">
                        <a href="/free-events" class="card link-card free">"Free Events"</a>
                        <a href="/guidelines" class="card link-card guides">"Guidelines"</a>
                        <a href="/centers" class="card link-card centers">"Centers"</a>
                    </div>

                    <div class="calendar-container">
                        <div class="calendar-header">
                            <div class="calendar-nav">
                                <button class="btn-nav" on:click=move |_| shift_year(true)>
                                    "‹ Year"
                                </button>
                                <button class="btn-nav" on:click=move |_| shift_month(true)>
                                    "‹ Month"
                                </button>
                            </div>
                            <h3>{move || { let (y, m) = shown.get(); month_title(y, m) }}</h3>
                            <div class="calendar-nav">
                                <button class="btn-nav" on:click=move |_| shift_month(false)>
                                    "Month ›"
                                </button>
                                <button class="btn-nav" on:click=move |_| shift_year(false)>
                                    "Year ›"
                                </button>
                            </div>
                        </div>

                        <div class="calendar-grid">
                            {WEEKDAYS
                                .iter()
                                .map(|d| view! { <div class="calendar-day-header">{*d}</div> })
                                .collect_view()}
                            {cells}
                        </div>
                    </div>

                    <Footer />
                </main>
            </div>
        </div>
    }
}
