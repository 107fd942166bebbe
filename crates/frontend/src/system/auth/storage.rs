use contracts::domain::user::User;
use web_sys::window;

// Fixed well-known keys; written together on login, cleared together on
// logout.
const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the auth token to localStorage
pub fn save_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Get the auth token from localStorage
pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Save the serialized user record to localStorage
pub fn save_user(user: &User) {
    if let (Some(storage), Ok(json)) = (get_local_storage(), serde_json::to_string(user)) {
        let _ = storage.set_item(USER_KEY, &json);
    }
}

/// Get the persisted user record from localStorage
pub fn get_user() -> Option<User> {
    let json = get_local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

/// Clear the persisted credentials
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
