pub mod admin_list;
pub mod bookings;
pub mod details;
pub mod home;
pub mod tests;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::resolve::use_center;
use crate::system::auth::context::use_session;

/// Top bar of the per-center area; links carry the resolved center id.
/// Rendered only after `CenterScope` has resolved, so the id is stable for
/// the lifetime of the subtree.
#[component]
pub fn CenterNavbar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let center = use_center();
    let center_id = center.get_untracked().map(|c| c.id).unwrap_or_default();

    let on_logout = move |_| {
        session.logout();
        navigate("/", Default::default());
    };

    view! {
        <nav class="navbar health-navbar">
            <div class="brand-wrap">
                <h1>"Health Center Dashboard"</h1>
            </div>
            <div class="nav-links">
                <a href=format!("/healthcenter/{center_id}/home") class="nav-link">
                    "Home"
                </a>
                <a href=format!("/healthcenter/{center_id}/bookings") class="nav-link">
                    "Bookings"
                </a>
                <a href=format!("/healthcenter/{center_id}/details") class="nav-link">
                    "Center Details"
                </a>
                <button class="btn btn-link logout-btn" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
