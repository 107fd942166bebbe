use leptos::prelude::*;

use crate::shared::icons::icon;

/// Banner shown while a list is in degraded mode (fallback sample data after
/// a failed load). Retry is manual and bounded; once the budget is spent the
/// button goes inert until a page change.
#[component]
pub fn DegradedBanner(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] can_retry: Signal<bool>,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="degraded-banner">
                {icon("alert-triangle")}
                <span>"Live data is unavailable. Showing sample data."</span>
                <button
                    class="button button--secondary"
                    disabled=move || !can_retry.get()
                    on:click=move |_| on_retry.run(())
                >
                    "Retry"
                </button>
            </div>
        </Show>
    }
}
