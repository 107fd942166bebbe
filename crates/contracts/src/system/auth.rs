use serde::{Deserialize, Serialize};

use crate::domain::user::User;

/// Process-wide session state.
///
/// Invariant: `is_authenticated` implies `user` is present.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            loading: true,
        }
    }
}

impl Session {
    /// Bootstrap decision: a persisted user record together with a token
    /// restores an authenticated session; anything less leaves the session
    /// unauthenticated. Runs exactly once at process start, after which
    /// `loading` is false.
    pub fn restore(stored_user: Option<User>, token: Option<String>) -> Self {
        match (stored_user, token) {
            (Some(user), Some(_)) => Self {
                user: Some(user),
                is_authenticated: true,
                loading: false,
            },
            _ => Self {
                user: None,
                is_authenticated: false,
                loading: false,
            },
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            loading: false,
        }
    }

    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /auth/login` response. Auth endpoints return their payload bare,
/// without the `{ data }` envelope the entity endpoints use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub birthday: String,
    pub password: String,
    pub password_repeat: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        serde_json::from_str(r#"{"id": 1, "username": "jperez"}"#).unwrap()
    }

    #[test]
    fn restore_with_both_credentials_authenticates() {
        let session = Session::restore(Some(user()), Some("jwt".into()));
        assert!(session.is_authenticated);
        assert!(session.user.is_some());
        assert!(!session.loading);
    }

    #[test]
    fn restore_without_token_stays_unauthenticated() {
        let session = Session::restore(Some(user()), None);
        assert!(!session.is_authenticated);
        assert!(session.user.is_none());
        assert!(!session.loading);
    }

    #[test]
    fn restore_without_user_stays_unauthenticated() {
        let session = Session::restore(None, Some("jwt".into()));
        assert!(!session.is_authenticated);
        assert!(session.user.is_none());
    }

    #[test]
    fn authenticated_sessions_always_carry_a_user() {
        for session in [
            Session::default(),
            Session::signed_out(),
            Session::signed_in(user()),
            Session::restore(Some(user()), Some("jwt".into())),
            Session::restore(None, None),
        ] {
            assert!(!session.is_authenticated || session.user.is_some());
        }
    }
}
