use leptos::children::ViewFn;
use leptos::prelude::*;

use super::context::use_session;

/// Gates protected content on session state.
///
/// While the session is still loading a pending view renders; once settled,
/// children render only for an authenticated session, otherwise `fallback`
/// (the login entry point). The check is reactive, so it re-runs on every
/// session change, not just at startup.
#[component]
pub fn RequireAuth(#[prop(into)] fallback: ViewFn, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let children = StoredValue::new(children);

    view! {
        <Show
            when=move || !state.get().loading
            fallback=|| view! { <div class="loading-screen">"Loading..."</div> }
        >
            <Show when=move || state.get().is_authenticated fallback=fallback.clone()>
                {move || children.with_value(|children| children())}
            </Show>
        </Show>
    }
}
