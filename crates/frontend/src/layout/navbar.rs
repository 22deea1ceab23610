use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::system::auth::context::use_session;

/// Top bar of the admin area.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate("/", Default::default());
    };

    view! {
        <nav class="navbar">
            <div class="brand-wrap">
                <h1>"MediSlot Admin"</h1>
            </div>
            <div class="nav-links">
                <a href="/home" class="nav-link">"Home"</a>
                <a href="/register" class="nav-link">"Register"</a>
                <button class="btn btn-link" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
