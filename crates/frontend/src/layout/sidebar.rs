use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <a href="/free-events">"Free Events"</a>
            <a href="/guidelines">"Guidelines"</a>
            <a href="/centers">"Centers"</a>
            <a href="/admin/health-awareness">"Health Awareness"</a>
        </aside>
    }
}
