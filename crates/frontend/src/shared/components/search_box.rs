use leptos::prelude::*;

use crate::shared::icons::icon;

/// Search input with a clear button. Filtering is local: the callback only
/// updates the page's search term, never the network.
#[component]
pub fn SearchBox(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-box">
            <input
                type="text"
                class="search-box__input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-box__clear"
                    title="Clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
