use contracts::domain::category::{Category, CategoryDraft};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::category::api::{self, CategoryGateway};
use crate::domain::category::fallback::sample_categories;
use crate::domain::category::ui::details::CategoryDetails;
use crate::shared::components::degraded_banner::DegradedBanner;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_box::SearchBox;
use crate::shared::form::FormController;
use crate::shared::icons::icon;
use crate::shared::list::ListController;
use crate::shared::toast::ToastService;

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let list = ListController::new(CategoryGateway, sample_categories());
    let form = FormController::new(CategoryGateway, list, toasts, "Category");
    let state = list.state;

    on_cleanup(move || list.cancel());
    list.load(1);

    let handle_edit = move |category: &Category| {
        form.open_edit(CategoryDraft::from_entity(category));
    };

    let handle_toggle_active = move |category: Category| {
        spawn_local(async move {
            match api::toggle_active(category.id).await {
                Ok(()) => {
                    let outcome = if category.active {
                        "Category deactivated"
                    } else {
                        "Category activated"
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

    let render_row = move |category: Category| {
        let for_edit = category.clone();
        let for_toggle = category.clone();
        let badge_class = if category.active {
            "badge badge--success"
        } else {
            "badge badge--danger"
        };
        view! {
            <tr class="table__row">
                <td>{category.id}</td>
                <td>{category.name.clone()}</td>
                <td>{category.quantity_products}</td>
                <td>
                    <span class=badge_class>
                        {if category.active { "Active" } else { "Inactive" }}
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
                        title=if category.active { "Deactivate" } else { "Activate" }
                        on:click=move |_| handle_toggle_active(for_toggle.clone())
                    >
                        {icon("refresh")}
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <div class="content">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"Categories"</h1>
                    <p class="page-subtitle">"Manage product categories"</p>
                </div>
                <button class="button button--primary" on:click=move |_| form.open_create()>
                    {icon("plus")}
                    "New Category"
                </button>
            </div>

            <div class="page-filters">
                <SearchBox
                    value=Signal::derive(move || state.with(|s| s.search_term.clone()))
                    on_change=Callback::new(move |term| list.set_search_term(term))
                    placeholder="Search categories..."
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
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Products"</th>
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
                    <div class="table-empty">"No categories found"</div>
                </Show>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.current_page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                on_page_change=Callback::new(move |page| list.change_page(page))
            />

            <Show when=move || form.is_open()>
                <CategoryDetails form=form />
            </Show>
        </div>
    }
}
