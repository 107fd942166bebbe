pub mod global_context;
pub mod header;
pub mod sidebar;

use leptos::prelude::*;

use crate::domain::category::ui::list::CategoriesPage;
use crate::domain::inventory::ui::list::InventoriesPage;
use crate::domain::product::ui::list::ProductsPage;
use crate::domain::user::ui::list::UsersPage;
use crate::layout::global_context::{AppGlobalContext, AppView};
use crate::pages::dashboard::DashboardPage;
use crate::system::pages::profile::ProfilePage;

/// Protected dashboard shell: header on top, sidebar on the left, the active
/// page in the content area.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    view! {
        <div class="app-layout">
            <header::Header />
            <div class="app-body">
                <sidebar::Sidebar />
                <main class="app-main">
                    {move || match ctx.active_view.get() {
                        AppView::Dashboard => view! { <DashboardPage /> }.into_any(),
                        AppView::Products => view! { <ProductsPage /> }.into_any(),
                        AppView::Categories => view! { <CategoriesPage /> }.into_any(),
                        AppView::Inventories => view! { <InventoriesPage /> }.into_any(),
                        AppView::Users => view! { <UsersPage /> }.into_any(),
                        AppView::Profile => view! { <ProfilePage /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
