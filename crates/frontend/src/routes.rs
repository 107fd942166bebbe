use leptos::prelude::*;

use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthScreen {
    Login,
    Register,
}

/// Public entry: login with a link to registration and back.
#[component]
fn AuthScreens() -> impl IntoView {
    let screen = RwSignal::new(AuthScreen::Login);

    view! {
        {move || match screen.get() {
            AuthScreen::Login => {
                view! {
                    <LoginPage on_register=Callback::new(move |_| {
                        screen.set(AuthScreen::Register)
                    }) />
                }
                    .into_any()
            }
            AuthScreen::Register => {
                view! {
                    <RegisterPage on_login=Callback::new(move |_| {
                        screen.set(AuthScreen::Login)
                    }) />
                }
                    .into_any()
            }
        }}
    }
}

/// Gate between the public auth screens and the protected shell. Runs on
/// every session change: logging out anywhere lands back on the login page.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <RequireAuth fallback=|| view! { <AuthScreens /> }>
            <Shell />
        </RequireAuth>
    }
}
