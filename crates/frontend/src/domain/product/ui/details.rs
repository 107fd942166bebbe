use contracts::domain::category::Category;
use contracts::domain::inventory::Inventory;
use leptos::prelude::*;

use crate::domain::product::api::ProductGateway;
use crate::shared::components::modal_frame::ModalFrame;
use crate::shared::form::FormController;
use crate::shared::icons::icon;

#[component]
pub fn ProductDetails(
    form: FormController<ProductGateway>,
    categories: RwSignal<Vec<Category>>,
    inventories: RwSignal<Vec<Inventory>>,
) -> impl IntoView {
    let state = form.state;
    let title = Signal::derive(move || {
        if form.is_editing() {
            "Edit Product".to_string()
        } else {
            "New Product".to_string()
        }
    });

    // The picker resets to the placeholder after each add.
    let picker_value = RwSignal::new(String::new());

    let handle_add_category = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        picker_value.set(String::new());
        let Ok(id) = value.parse::<i64>() else {
            return;
        };
        let Some(category) = categories.with_untracked(|all| {
            all.iter().find(|c| c.id == id).cloned()
        }) else {
            return;
        };
        form.edit("categories", |d| d.add_category(category));
    };

    view! {
        <ModalFrame title=title on_close=Callback::new(move |_| form.close())>
            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                form.submit();
            }>
                <div class="form-row">
                    <div class="form-group">
                        <label>"Name"</label>
                        <input
                            type="text"
                            prop:value=move || state.with(|s| s.draft.name.clone())
                            on:input=move |ev| {
                                form.edit("name", |d| d.name = event_target_value(&ev))
                            }
                        />
                        {move || {
                            form.error_for("name")
                                .map(|e| view! { <div class="form-error">{e}</div> })
                        }}
                    </div>
                    <div class="form-group">
                        <label>"Serial number"</label>
                        <input
                            type="text"
                            prop:value=move || state.with(|s| s.draft.serial_number.clone())
                            on:input=move |ev| {
                                form.edit(
                                    "serialNumber",
                                    |d| d.serial_number = event_target_value(&ev),
                                )
                            }
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label>"Description"</label>
                    <textarea
                        prop:value=move || state.with(|s| s.draft.description.clone())
                        on:input=move |ev| {
                            form.edit("description", |d| d.description = event_target_value(&ev))
                        }
                    ></textarea>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label>"Quantity"</label>
                        <input
                            type="number"
                            min="0"
                            prop:value=move || state.with(|s| s.draft.quantity.clone())
                            on:input=move |ev| {
                                form.edit("quantity", |d| d.quantity = event_target_value(&ev))
                            }
                        />
                        {move || {
                            form.error_for("quantity")
                                .map(|e| view! { <div class="form-error">{e}</div> })
                        }}
                    </div>
                    <div class="form-group">
                        <label>"Batch"</label>
                        <input
                            type="number"
                            prop:value=move || state.with(|s| s.draft.batch.clone())
                            on:input=move |ev| {
                                form.edit("batch", |d| d.batch = event_target_value(&ev))
                            }
                        />
                        {move || {
                            form.error_for("batch")
                                .map(|e| view! { <div class="form-error">{e}</div> })
                        }}
                    </div>
                </div>

                <div class="form-group">
                    <label>"Inventory"</label>
                    <select
                        prop:value=move || {
                            state
                                .with(|s| {
                                    s.draft
                                        .inventory_id
                                        .map(|id| id.to_string())
                                        .unwrap_or_default()
                                })
                        }
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.edit("inventory", |d| d.inventory_id = value.parse().ok());
                        }
                    >
                        <option value="">"Select an inventory"</option>
                        <For
                            each=move || inventories.get()
                            key=|inventory| inventory.id
                            children=move |inventory| {
                                view! {
                                    <option value=inventory.id.to_string()>
                                        {inventory.name.clone()}
                                    </option>
                                }
                            }
                        />
                    </select>
                    {move || {
                        form.error_for("inventory")
                            .map(|e| view! { <div class="form-error">{e}</div> })
                    }}
                </div>

                <div class="form-group">
                    <label>"Add category"</label>
                    <select prop:value=move || picker_value.get() on:change=handle_add_category>
                        <option value="">"Select a category"</option>
                        <For
                            each=move || categories.get()
                            key=|category| category.id
                            children=move |category| {
                                view! {
                                    <option value=category.id.to_string()>
                                        {category.name.clone()}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>

                <Show when=move || state.with(|s| !s.draft.categories.is_empty())>
                    <div class="chip-list">
                        <For
                            each=move || state.with(|s| s.draft.categories.clone())
                            key=|category| category.id
                            children=move |category| {
                                let id = category.id;
                                view! {
                                    <span class="chip">
                                        {category.name.clone()}
                                        <button
                                            type="button"
                                            class="chip__remove"
                                            on:click=move |_| {
                                                form.edit(
                                                    "categories",
                                                    |d| d.remove_category(id),
                                                )
                                            }
                                        >
                                            {icon("x")}
                                        </button>
                                    </span>
                                }
                            }
                        />
                    </div>
                </Show>

                <div class="form-group">
                    <label class="form-checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || state.with(|s| s.draft.active)
                            on:change=move |ev| {
                                form.edit("active", |d| d.active = event_target_checked(&ev))
                            }
                        />
                        "Active"
                    </label>
                </div>

                <div class="modal__footer">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| form.close()
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || form.is_submitting()
                    >
                        {move || {
                            if form.is_submitting() {
                                "Saving..."
                            } else if form.is_editing() {
                                "Save changes"
                            } else {
                                "Create product"
                            }
                        }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
