use contracts::system::auth::UserRole;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::system::auth::context::use_session;

/// Landing route of each role after a successful login.
fn home_route(role: UserRole) -> Option<&'static str> {
    match role {
        UserRole::Admin => Some("/home"),
        UserRole::HealthCenterAdmin => Some("/healthcenter/me"),
        UserRole::Patient => None,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();
        let navigate = navigate.clone();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match session.login(email_val, password_val).await {
                Ok(user) => {
                    let _ = set_is_loading.try_set(false);
                    match home_route(user.user_category) {
                        Some(route) => navigate(route, Default::default()),
                        None => {
                            let _ = set_error_message.try_set(Some(
                                "This dashboard is for administrators only.".to_string(),
                            ));
                        }
                    }
                }
                Err(message) => {
                    let _ = set_error_message.try_set(Some(message));
                    let _ = set_is_loading.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Admin Login"</h2>

                <Show when=move || error_message.get().is_some()>
                    <p class="error">{move || error_message.get().unwrap_or_default()}</p>
                </Show>

                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />

                <button class="btn primary" type="submit" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_land_on_their_dashboard() {
        assert_eq!(home_route(UserRole::Admin), Some("/home"));
        assert_eq!(home_route(UserRole::HealthCenterAdmin), Some("/healthcenter/me"));
        assert_eq!(home_route(UserRole::Patient), None);
    }
}
