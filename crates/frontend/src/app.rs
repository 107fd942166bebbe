use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoutes;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::SessionProvider;

#[component]
pub fn App() -> impl IntoView {
    // App-wide services live in context: navigation state and the toast queue.
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());

    view! {
        <SessionProvider>
            <AppRoutes />
            <ToastHost />
        </SessionProvider>
    }
}
