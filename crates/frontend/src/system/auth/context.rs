use contracts::system::auth::{LoginRequest, User};
use leptos::prelude::*;

use super::{api, storage};

/// Session lifecycle: `Restoring` until the persisted session has been
/// examined, then `Anonymous` or `Authenticated`. The guard treats
/// `Restoring` as a blocking state, so no protected view can render (or
/// redirect) before restore has finished.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    Restoring,
    Anonymous,
    Authenticated(User),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

/// Restore is optimistic: a persisted token is trusted together with the
/// persisted profile, and the first request answered with 401 forces a
/// logout. Either slot missing means no session.
fn restored_state(token: Option<String>, user: Option<User>) -> SessionState {
    match (token, user) {
        (Some(_), Some(user)) => SessionState::Authenticated(user),
        _ => SessionState::Anonymous,
    }
}

/// Owns the session state. Created once at the application root and handed
/// out through context; every other component sees a read-only view and all
/// mutations go through `login` / `logout` / `force_logout`.
#[derive(Clone, Copy)]
pub struct SessionManager {
    state: RwSignal<SessionState>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::Restoring),
        }
    }

    /// Runs once at startup, before the router renders. Purely local, no
    /// server round-trip.
    pub fn restore(&self) {
        let (token, user) = storage::load();
        let next = restored_state(token, user);
        if next == SessionState::Anonymous {
            // drop a half-written session so the token slot cannot leak
            storage::clear();
        }
        self.state.set(next);
    }

    /// Returns the profile on success so the caller can branch navigation
    /// by role. On failure the session stays `Anonymous`.
    pub async fn login(&self, email: String, password: String) -> Result<User, String> {
        let response = api::login(&LoginRequest { email, password }).await?;
        storage::save(&response.token, &response.user);
        self.state
            .set(SessionState::Authenticated(response.user.clone()));
        Ok(response.user)
    }

    /// Synchronous and idempotent; never fails.
    pub fn logout(&self) {
        storage::clear();
        self.state.set(SessionState::Anonymous);
    }

    /// System-initiated termination after a 401 response. Same effect as
    /// `logout`; kept separate so call sites read as what they are.
    pub fn force_logout(&self) {
        log::warn!("session invalidated by the server, forcing logout");
        self.logout();
    }

    /// Reactive snapshot of the session state.
    pub fn snapshot(&self) -> SessionState {
        self.state.get()
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to reach the session from any component under the app root.
pub fn use_session() -> SessionManager {
    expect_context::<SessionManager>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::UserRole;

    fn profile() -> User {
        User {
            id: "u1".into(),
            name: "Admin".into(),
            email: "a@x.com".into(),
            contact_no: None,
            address: None,
            user_category: UserRole::Admin,
            center: None,
        }
    }

    #[test]
    fn restore_needs_both_slots() {
        assert_eq!(restored_state(None, None), SessionState::Anonymous);
        assert_eq!(
            restored_state(Some("T1".into()), None),
            SessionState::Anonymous
        );
        assert_eq!(restored_state(None, Some(profile())), SessionState::Anonymous);
    }

    #[test]
    fn restore_yields_the_persisted_profile() {
        let state = restored_state(Some("T1".into()), Some(profile()));
        assert_eq!(state.user().map(|u| u.id.as_str()), Some("u1"));
        assert!(state.is_authenticated());
    }

    #[test]
    fn logout_is_idempotent() {
        let session = SessionManager::new();
        session.state.set(SessionState::Authenticated(profile()));
        assert!(session.is_authenticated());

        session.logout();
        assert_eq!(session.snapshot(), SessionState::Anonymous);

        // a second logout, or one from an already-anonymous session, is a
        // no-op rather than an error
        session.logout();
        session.force_logout();
        assert_eq!(session.snapshot(), SessionState::Anonymous);
        assert!(session.user().is_none());
    }
}
