use contracts::system::auth::{RegisterRequest, UserRole};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::api;

/// Local validation mirroring the backend's minimal rules, so obvious
/// mistakes never leave the browser.
fn validate(name: &str, email: &str, password: &str, confirm: &str) -> Result<(), String> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err("Name, email, and password are required.".to_string());
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters.".to_string());
    }
    if password != confirm {
        return Err("Passwords do not match.".to_string());
    }
    Ok(())
}

fn parse_role(raw: &str) -> UserRole {
    match raw {
        "healthCenterAdmin" => UserRole::HealthCenterAdmin,
        "patient" => UserRole::Patient,
        _ => UserRole::Admin,
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (contact_no, set_contact_no) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (role, set_role) = signal("admin".to_string());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (success, set_success) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);
        set_success.set(None);

        if let Err(message) = validate(&name.get(), &email.get(), &password.get(), &confirm.get()) {
            set_error_message.set(Some(message));
            return;
        }

        let optional = |value: String| {
            let trimmed = value.trim().to_string();
            (!trimmed.is_empty()).then_some(trimmed)
        };
        let request = RegisterRequest {
            name: name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            contact_no: optional(contact_no.get()),
            address: optional(address.get()),
            user_category: parse_role(&role.get()),
            password: password.get(),
        };

        set_is_loading.set(true);
        spawn_local(async move {
            match api::register(&request).await {
                Ok(_) => {
                    let _ = set_success.try_set(Some("User registered successfully!".to_string()));
                    let _ = set_name.try_set(String::new());
                    let _ = set_email.try_set(String::new());
                    let _ = set_contact_no.try_set(String::new());
                    let _ = set_address.try_set(String::new());
                    let _ = set_password.try_set(String::new());
                    let _ = set_confirm.try_set(String::new());
                }
                Err(message) => {
                    let shown = if message == "Duplicate email" {
                        "Email already exists.".to_string()
                    } else {
                        message
                    };
                    let _ = set_error_message.try_set(Some(shown));
                }
            }
            let _ = set_is_loading.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Create Account"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error">{move || error_message.get().unwrap_or_default()}</div>
                </Show>
                <Show when=move || success.get().is_some()>
                    <div class="success">{move || success.get().unwrap_or_default()}</div>
                </Show>

                <input
                    placeholder="Full name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    placeholder="Contact number"
                    prop:value=move || contact_no.get()
                    on:input=move |ev| set_contact_no.set(event_target_value(&ev))
                />
                <input
                    placeholder="Address"
                    prop:value=move || address.get()
                    on:input=move |ev| set_address.set(event_target_value(&ev))
                />

                <select
                    prop:value=move || role.get()
                    on:change=move |ev| set_role.set(event_target_value(&ev))
                >
                    <option value="admin">"Admin"</option>
                    <option value="healthCenterAdmin">"Health Center"</option>
                    <option value="patient">"Patient"</option>
                </select>

                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Confirm password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                />

                <button class="btn" type="submit" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Registering..." } else { "Register" }}
                </button>

                <div class="auth-links">
                    <a href="/">"Go to Login"</a>
                    <a href="/home">"Dashboard"</a>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_required_fields() {
        assert!(validate("", "a@x.com", "secret1", "secret1").is_err());
        assert!(validate("Jane", "", "secret1", "secret1").is_err());
    }

    #[test]
    fn rejects_short_or_mismatched_passwords() {
        assert!(validate("Jane", "a@x.com", "abc", "abc").is_err());
        assert!(validate("Jane", "a@x.com", "secret1", "secret2").is_err());
        assert!(validate("Jane", "a@x.com", "secret1", "secret1").is_ok());
    }

    #[test]
    fn role_select_values_map_to_wire_roles() {
        assert_eq!(parse_role("admin"), UserRole::Admin);
        assert_eq!(parse_role("healthCenterAdmin"), UserRole::HealthCenterAdmin);
        assert_eq!(parse_role("patient"), UserRole::Patient);
    }
}
