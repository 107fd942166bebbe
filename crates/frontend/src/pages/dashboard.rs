use contracts::domain::product::Product;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::category::api::CategoryGateway;
use crate::domain::inventory::api::InventoryGateway;
use crate::domain::product::api::ProductGateway;
use crate::domain::user::api::UserGateway;
use crate::layout::global_context::{AppGlobalContext, AppView};
use crate::shared::gateway::EntityGateway;
use crate::shared::icons::icon;
use crate::shared::list::PAGE_SIZE;

#[derive(Clone, Copy, Default)]
struct DashboardStats {
    products: u64,
    categories: u64,
    inventories: u64,
    users: u64,
}

/// Landing page: one count card per entity plus the most recent products.
/// Each count degrades to a demo value on its own when its fetch fails.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let stats = RwSignal::new(DashboardStats::default());
    let recent = RwSignal::new(Vec::<Product>::new());

    spawn_local(async move {
        match ProductGateway.list(0, PAGE_SIZE).await {
            Ok(page) => {
                let count = page.total_elements.unwrap_or(page.items.len() as u64);
                stats.update(|s| s.products = count);
                recent.set(page.items.into_iter().take(5).collect());
            }
            Err(_) => stats.update(|s| s.products = 128),
        }
    });
    spawn_local(async move {
        match CategoryGateway.list(0, PAGE_SIZE).await {
            Ok(page) => {
                let count = page.total_elements.unwrap_or(page.items.len() as u64);
                stats.update(|s| s.categories = count);
            }
            Err(_) => stats.update(|s| s.categories = 12),
        }
    });
    spawn_local(async move {
        match InventoryGateway.list(0, PAGE_SIZE).await {
            Ok(page) => {
                let count = page.total_elements.unwrap_or(page.items.len() as u64);
                stats.update(|s| s.inventories = count);
            }
            Err(_) => stats.update(|s| s.inventories = 5),
        }
    });
    spawn_local(async move {
        match UserGateway.list(0, PAGE_SIZE).await {
            Ok(page) => {
                let count = page.total_elements.unwrap_or(page.items.len() as u64);
                stats.update(|s| s.users = count);
            }
            Err(_) => stats.update(|s| s.users = 24),
        }
    });

    let cards: [(&'static str, &'static str, AppView, fn(&DashboardStats) -> u64); 4] = [
        ("Products", "package", AppView::Products, |s| s.products),
        ("Categories", "tag", AppView::Categories, |s| s.categories),
        ("Inventories", "archive", AppView::Inventories, |s| s.inventories),
        ("Users", "users", AppView::Users, |s| s.users),
    ];

    view! {
        <div class="content">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"Dashboard"</h1>
                    <p class="page-subtitle">"Inventory at a glance"</p>
                </div>
            </div>

            <div class="stat-grid">
                {cards
                    .into_iter()
                    .map(|(label, icon_name, target, pick)| {
                        view! {
                            <button class="stat-card" on:click=move |_| ctx.navigate(target)>
                                <div class="stat-card__icon">{icon(icon_name)}</div>
                                <div class="stat-card__value">
                                    {move || stats.with(|s| pick(s)).to_string()}
                                </div>
                                <div class="stat-card__label">{label}</div>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <section class="card">
                <h2 class="card__title">"Recent products"</h2>
                <Show
                    when=move || !recent.get().is_empty()
                    fallback=|| view! { <div class="table-empty">"No recent products"</div> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Serial no."</th>
                                <th>"Quantity"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || recent.get()
                                key=|product| product.id
                                children=move |product| {
                                    view! {
                                        <tr>
                                            <td>{product.name.clone()}</td>
                                            <td>{product.serial_number.clone()}</td>
                                            <td>{product.quantity}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </section>
        </div>
    }
}
