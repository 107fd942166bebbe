use leptos::prelude::*;

use crate::layout::global_context::{AppGlobalContext, AppView};
use crate::shared::icons::icon;

const MENU: [(AppView, &str); 6] = [
    (AppView::Dashboard, "layout-dashboard"),
    (AppView::Products, "package"),
    (AppView::Categories, "tag"),
    (AppView::Inventories, "archive"),
    (AppView::Users, "users"),
    (AppView::Profile, "user"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">
                {icon("package")}
                <span>"Inventory Manager"</span>
            </div>
            <ul class="sidebar__menu">
                {MENU
                    .into_iter()
                    .map(|(target, icon_name)| {
                        view! {
                            <li>
                                <button
                                    class="sidebar__item"
                                    class:sidebar__item--active=move || {
                                        ctx.active_view.get() == target
                                    }
                                    on:click=move |_| ctx.navigate(target)
                                >
                                    {icon(icon_name)}
                                    <span>{target.title()}</span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
