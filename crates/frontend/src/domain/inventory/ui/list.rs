use contracts::domain::inventory::{Inventory, InventoryDraft};
use leptos::prelude::*;

use crate::domain::inventory::api::InventoryGateway;
use crate::domain::inventory::fallback::sample_inventories;
use crate::domain::inventory::ui::details::InventoryDetails;
use crate::shared::components::degraded_banner::DegradedBanner;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_box::SearchBox;
use crate::shared::form::FormController;
use crate::shared::icons::icon;
use crate::shared::list::ListController;
use crate::shared::toast::ToastService;

#[component]
pub fn InventoriesPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let list = ListController::new(InventoryGateway, sample_inventories());
    let form = FormController::new(InventoryGateway, list, toasts, "Inventory");
    let state = list.state;

    on_cleanup(move || list.cancel());
    list.load(1);

    let handle_edit = move |inventory: &Inventory| {
        form.open_edit(InventoryDraft::from_entity(inventory));
    };

    let render_row = move |inventory: Inventory| {
        let for_edit = inventory.clone();
        let created = inventory
            .create_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        view! {
            <tr class="table__row">
                <td>{inventory.name.clone()}</td>
                <td>{inventory.description.clone()}</td>
                <td>{inventory.location.clone()}</td>
                <td>{inventory.quantity}</td>
                <td>{created}</td>
                <td class="table__actions">
                    <button
                        class="button button--ghost"
                        title="Edit"
                        on:click=move |_| handle_edit(&for_edit)
                    >
                        {icon("edit")}
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <div class="content">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"Inventories"</h1>
                    <p class="page-subtitle">"Manage warehouses and storage locations"</p>
                </div>
                <button class="button button--primary" on:click=move |_| form.open_create()>
                    {icon("plus")}
                    "New Inventory"
                </button>
            </div>

            <div class="page-filters">
                <SearchBox
                    value=Signal::derive(move || state.with(|s| s.search_term.clone()))
                    on_change=Callback::new(move |term| list.set_search_term(term))
                    placeholder="Search inventories..."
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
                            <th>"Description"</th>
                            <th>"Location"</th>
                            <th>"Items"</th>
                            <th>"Created"</th>
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
                    <div class="table-empty">"No inventories found"</div>
                </Show>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.current_page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                on_page_change=Callback::new(move |page| list.change_page(page))
            />

            <Show when=move || form.is_open()>
                <InventoryDetails form=form />
            </Show>
        </div>
    }
}
