use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::{use_session, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still restoring: render nothing, never redirect early.
    Wait,
    RedirectToLogin,
    Allow,
}

pub fn guard_outcome(state: &SessionState) -> GuardOutcome {
    match state {
        SessionState::Restoring => GuardOutcome::Wait,
        SessionState::Anonymous => GuardOutcome::RedirectToLogin,
        SessionState::Authenticated(_) => GuardOutcome::Allow,
    }
}

/// Wraps any view that requires an authenticated session. The decision is
/// re-evaluated on every session-state change, so a logout while a
/// protected view is mounted redirects immediately.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    move || match guard_outcome(&session.snapshot()) {
        GuardOutcome::Wait => ().into_any(),
        GuardOutcome::RedirectToLogin => view! { <Redirect path="/" /> }.into_any(),
        GuardOutcome::Allow => children().into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::{User, UserRole};

    #[test]
    fn restoring_blocks_without_redirect() {
        assert_eq!(guard_outcome(&SessionState::Restoring), GuardOutcome::Wait);
    }

    #[test]
    fn anonymous_redirects_to_login() {
        assert_eq!(
            guard_outcome(&SessionState::Anonymous),
            GuardOutcome::RedirectToLogin
        );
    }

    #[test]
    fn authenticated_renders_children() {
        let user = User {
            id: "u1".into(),
            name: "Admin".into(),
            email: "a@x.com".into(),
            contact_no: None,
            address: None,
            user_category: UserRole::Admin,
            center: None,
        };
        assert_eq!(
            guard_outcome(&SessionState::Authenticated(user)),
            GuardOutcome::Allow
        );
    }
}
