use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let state = session.state();

    let display_name = move || {
        state
            .get()
            .user
            .map(|u| {
                if u.name.is_empty() {
                    u.username
                } else {
                    format!("{} {}", u.name, u.lastname).trim().to_string()
                }
            })
            .unwrap_or_default()
    };

    view! {
        <header class="header">
            <div class="header__spacer"></div>
            <div class="header__user">
                <span class="header__username">{display_name}</span>
                <button
                    class="header__logout"
                    title="Sign out"
                    on:click=move |_| session.logout()
                >
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}
