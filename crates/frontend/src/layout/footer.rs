use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer-modern">
            <div class="footer-left">
                <span class="brand">"MediSlot Admin"</span>
                <span class="dot">"•"</span>
                <span>{format!("© {year}")}</span>
            </div>
            <div class="footer-center">
                <a href="/home">"Home"</a>
                <a href="/free-events">"Free Events"</a>
                <a href="/guidelines">"Guidelines"</a>
                <a href="/centers">"Centers"</a>
                <a href="/admin/health-awareness">"Health Awareness"</a>
            </div>
        </footer>
    }
}
