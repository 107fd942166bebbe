use contracts::domain::category::Category;
use contracts::domain::inventory::Inventory;
use contracts::domain::product::{Product, ProductDraft};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::category::api::CategoryGateway;
use crate::domain::category::fallback::sample_categories;
use crate::domain::inventory::api::InventoryGateway;
use crate::domain::inventory::fallback::sample_inventories;
use crate::domain::product::api::{self, ProductGateway};
use crate::domain::product::fallback::sample_products;
use crate::domain::product::ui::details::ProductDetails;
use crate::shared::components::degraded_banner::DegradedBanner;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_box::SearchBox;
use crate::shared::confirm;
use crate::shared::form::FormController;
use crate::shared::gateway::EntityGateway;
use crate::shared::icons::icon;
use crate::shared::list::{ListController, PAGE_SIZE};
use crate::shared::toast::ToastService;
use crate::system::auth::context::use_session;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let list = ListController::new(ProductGateway, sample_products());
    let form = FormController::new(ProductGateway, list, toasts, "Product");
    let state = list.state;

    // Read-only reference snapshots for the form's pickers, fetched
    // independently with their own demo fallbacks.
    let categories = RwSignal::new(Vec::<Category>::new());
    let inventories = RwSignal::new(Vec::<Inventory>::new());
    spawn_local(async move {
        match CategoryGateway.list(0, PAGE_SIZE).await {
            Ok(page) => categories.set(page.items),
            Err(_) => categories.set(sample_categories()),
        }
    });
    spawn_local(async move {
        match InventoryGateway.list(0, PAGE_SIZE).await {
            Ok(page) => inventories.set(page.items),
            Err(_) => inventories.set(sample_inventories()),
        }
    });

    on_cleanup(move || list.cancel());
    list.load(1);

    let handle_create = move |_| {
        // New products are stamped with the session user.
        let mut draft = ProductDraft::default();
        draft.created_by_user_id =
            session.state().with_untracked(|s| s.user.as_ref().map(|u| u.id));
        form.open_create_with(draft);
    };

    let handle_edit = move |product: &Product| {
        form.open_edit(ProductDraft::from_entity(product));
    };

    let handle_delete = move |product: Product| {
        if !confirm(&format!("Delete product \"{}\"?", product.name)) {
            return;
        }
        spawn_local(async move {
            match ProductGateway.delete(product.id).await {
                Ok(()) => {
                    toasts.success("Success", "Product deleted");
                    list.refresh();
                }
                Err(e) => {
                    toasts.error("Error", &e);
                }
            }
        });
    };

    let handle_toggle_active = move |product: Product| {
        spawn_local(async move {
            match api::toggle_active(product.id).await {
                Ok(()) => {
                    let outcome = if product.active {
                        "Product deactivated"
                    } else {
                        "Product activated"
                    };
                    toasts.success("Success", outcome);
                    list.refresh();
                }
                Err(e) => {
                    toasts.error("Error", &e);
                }
            }
        });
    };

    let render_row = move |product: Product| {
        let for_edit = product.clone();
        let for_delete = product.clone();
        let for_toggle = product.clone();
        let batch = product
            .batch
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".to_string());
        let badge_class = if product.active {
            "badge badge--success"
        } else {
            "badge badge--danger"
        };
        view! {
            <tr class="table__row">
                <td>{product.name.clone()}</td>
                <td>{product.serial_number.clone()}</td>
                <td>{product.quantity}</td>
                <td>{batch}</td>
                <td>
                    <span class=badge_class>
                        {if product.active { "Active" } else { "Inactive" }}
                    </span>
                </td>
                <td class="table__actions">
                    <button
                        class="button button--ghost"
                        title="Edit"
                        on:click=move |_| handle_edit(&for_edit)
                    >
                        {icon("edit")}
                    </button>
                    <button
                        class="button button--ghost"
                        title=if product.active { "Deactivate" } else { "Activate" }
                        on:click=move |_| handle_toggle_active(for_toggle.clone())
                    >
                        {icon("refresh")}
                    </button>
                    <button
                        class="button button--ghost"
                        title="Delete"
                        on:click=move |_| handle_delete(for_delete.clone())
                    >
                        {icon("trash")}
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <div class="content">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"Products"</h1>
                    <p class="page-subtitle">"Manage stocked products"</p>
                </div>
                <button class="button button--primary" on:click=handle_create>
                    {icon("plus")}
                    "New Product"
                </button>
            </div>

            <div class="page-filters">
                <SearchBox
                    value=Signal::derive(move || state.with(|s| s.search_term.clone()))
                    on_change=Callback::new(move |term| list.set_search_term(term))
                    placeholder="Search products..."
                />
            </div>

            <DegradedBanner
                visible=Signal::derive(move || state.with(|s| s.is_degraded()))
                can_retry=Signal::derive(move || state.with(|s| s.can_retry()))
                on_retry=Callback::new(move |_| list.retry())
            />

            <div class="table-container">
                <table class="table table--striped">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Serial no."</th>
                            <th>"Quantity"</th>
                            <th>"Batch"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            state.with(|s| s.filtered()).into_iter().map(render_row).collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || {
                    state.with(|s| s.filtered().is_empty() && !s.is_loading())
                }>
                    <div class="table-empty">"No products found"</div>
                </Show>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.current_page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                on_page_change=Callback::new(move |page| list.change_page(page))
            />

            <Show when=move || form.is_open()>
                <ProductDetails form=form categories=categories inventories=inventories />
            </Show>
        </div>
    }
}
