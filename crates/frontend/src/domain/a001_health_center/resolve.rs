//! Center resolution middleware for the `/healthcenter` subtree.
//!
//! `MyCenterRedirect` turns "my center" into a concrete center URL;
//! `CenterScope` fetches the addressed center, enforces the ownership
//! invariant once for the whole subtree, and publishes the resolved record
//! through context.

use contracts::domain::centers::Center;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

use super::api;
use super::ui::CenterNavbar;
use crate::shared::http::use_api;
use crate::system::auth::context::use_session;

const DENIED_MESSAGE: &str = "You are not allowed to access this center.";

/// The resolved center, available to every view nested under
/// `CenterScope`. Stays `None` until resolution and authorization both
/// succeed, so denied or failed lookups never leak center data.
#[derive(Clone, Copy)]
pub struct CenterContext(pub ReadSignal<Option<Center>>);

pub fn use_center() -> ReadSignal<Option<Center>> {
    expect_context::<CenterContext>().0
}

/// Resolves the session identity to its own center and replace-navigates
/// to that center's home view. On failure the server message renders in
/// place and no navigation happens.
#[component]
pub fn MyCenterRedirect() -> impl IntoView {
    let api_client = use_api();
    let navigate = use_navigate();
    let (error, set_error) = signal(Option::<String>::None);

    spawn_local(async move {
        match api::fetch_my_center(api_client).await {
            Ok(center) => {
                navigate(
                    &format!("/healthcenter/{}/home", center.id),
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
            Err(e) => {
                let _ = set_error.try_set(Some(e.message()));
            }
        }
    });

    move || match error.get() {
        Some(message) => view! { <p class="resolver-error">{message}</p> }.into_any(),
        None => view! { <p class="resolver-status">"Loading your center…"</p> }.into_any(),
    }
}

/// Parent view for `/healthcenter/:centerId`. Re-resolves whenever the
/// path parameter changes; nested routes render through `Outlet` only
/// after the ownership check has passed.
#[component]
pub fn CenterScope() -> impl IntoView {
    let api_client = use_api();
    let session = use_session();
    let params = use_params_map();
    let (center, set_center) = signal(Option::<Center>::None);
    let (error, set_error) = signal(Option::<String>::None);

    provide_context(CenterContext(center));

    Effect::new(move |_| {
        let Some(id) = params.get().get("centerId") else {
            return;
        };
        set_center.set(None);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_center(api_client, &id).await {
                Ok(resolved) => {
                    let allowed = session
                        .user()
                        .map(|u| u.manages_center(&resolved.id))
                        .unwrap_or(false);
                    if allowed {
                        let _ = set_center.try_set(Some(resolved));
                    } else {
                        // distinct from a failed fetch: the record exists,
                        // this session may not see it
                        let _ = set_error.try_set(Some(DENIED_MESSAGE.to_string()));
                    }
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.message()));
                }
            }
        });
    });

    move || {
        if let Some(message) = error.get() {
            return view! { <p class="resolver-error">{message}</p> }.into_any();
        }
        if center.with(Option::is_none) {
            return view! { <p class="resolver-status">"Loading center…"</p> }.into_any();
        }
        view! {
            <div class="layout health-center-layout">
                <CenterNavbar />
                <Outlet />
                <footer class="footer health-footer">
                    <p>"© MediSlot Health Centers"</p>
                </footer>
            </div>
        }
        .into_any()
    }
}
