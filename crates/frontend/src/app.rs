use leptos::prelude::*;

use crate::routes::AppRoutes;
use crate::shared::http::ApiClient;
use crate::system::auth::context::SessionManager;

#[component]
pub fn App() -> impl IntoView {
    // The session is owned here and reaches every component through
    // context. Restore runs before the router mounts so the guard never
    // races a half-initialized session.
    let session = SessionManager::new();
    session.restore();
    provide_context(session);
    provide_context(ApiClient::new(session));

    view! {
        <AppRoutes />
    }
}
