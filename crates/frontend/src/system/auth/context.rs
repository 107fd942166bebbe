use contracts::domain::user::User;
use contracts::system::auth::{RegisterRequest, Session};
use leptos::prelude::*;

use super::{api, storage};

/// Process-wide session handle. Session state is mutated only through the
/// operations here; views read it through `state()`.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<Session>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(Session::default()),
        }
    }

    pub fn state(&self) -> RwSignal<Session> {
        self.state
    }

    /// Reads the persisted `(user, token)` pair. No network round trip;
    /// completes exactly once, after which `loading` is false.
    pub fn bootstrap(&self) {
        let restored = Session::restore(storage::get_user(), storage::get_token());
        self.state.set(restored);
    }

    /// On success the token and user are persisted and the session becomes
    /// authenticated. On failure nothing is persisted and the session stays
    /// unauthenticated; the error carries a human-readable message.
    pub async fn login(&self, username: String, password: String) -> Result<(), String> {
        let response = api::login(username, password).await?;
        storage::save_token(&response.token);
        storage::save_user(&response.user);
        self.state.set(Session::signed_in(response.user));
        Ok(())
    }

    /// Registration does not authenticate; the caller logs in afterwards.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), String> {
        api::register(request).await
    }

    /// Idempotent; safe to call when already logged out.
    pub fn logout(&self) {
        storage::clear_session();
        self.state.set(Session::signed_out());
    }

    /// Profile update: replaces the session user and re-persists the record.
    pub fn update_user(&self, user: User) {
        storage::save_user(&user);
        self.state.update(|s| s.user = Some(user));
    }
}

/// Provides the session to the whole app and runs the bootstrap once.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let session = SessionContext::new();
    session.bootstrap();
    provide_context(session);

    children()
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}
