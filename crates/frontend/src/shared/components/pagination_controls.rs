use leptos::prelude::*;

use crate::shared::icons::icon;

/// Reusable pagination controls over one-based pages. Out-of-range
/// navigation is prevented here by disabling the affordances; the list
/// controller itself performs no clamping.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages (always >= 1)
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Callback when the page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || current_page.get() <= 1
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {}", current_page.get(), total_pages.get().max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().max(1))
                disabled=move || current_page.get() >= total_pages.get()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
