use contracts::system::auth::User;
use web_sys::window;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

fn get_local_storage() -> Option<web_sys::Storage> {
    // browser storage only exists on the wasm target; everywhere else the
    // store reads as empty and writes go nowhere
    if cfg!(not(target_arch = "wasm32")) {
        return None;
    }
    window()?.local_storage().ok()?
}

/// Persist the bearer token and profile together so a page reload can
/// restore the session. Both slots are written in one call; a session with
/// only one of them present is treated as absent by `load`.
pub fn save(token: &str, user: &User) {
    if let Some(storage) = get_local_storage() {
        if let Ok(profile) = serde_json::to_string(user) {
            let _ = storage.set_item(TOKEN_KEY, token);
            let _ = storage.set_item(USER_KEY, &profile);
        }
    }
}

/// Read the persisted session. Never fails: a missing slot or a profile
/// that no longer parses yields `None` for that part.
pub fn load() -> (Option<String>, Option<User>) {
    let Some(storage) = get_local_storage() else {
        return (None, None);
    };
    let token = storage.get_item(TOKEN_KEY).ok().flatten();
    let user = storage
        .get_item(USER_KEY)
        .ok()
        .flatten()
        .and_then(|raw| serde_json::from_str(&raw).ok());
    (token, user)
}

pub fn token() -> Option<String> {
    get_local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Clear both slots. Idempotent.
pub fn clear() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
