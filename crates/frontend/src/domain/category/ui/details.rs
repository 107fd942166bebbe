use leptos::prelude::*;

use crate::domain::category::api::CategoryGateway;
use crate::shared::components::modal_frame::ModalFrame;
use crate::shared::form::FormController;

#[component]
pub fn CategoryDetails(form: FormController<CategoryGateway>) -> impl IntoView {
    let state = form.state;
    let title = Signal::derive(move || {
        if form.is_editing() {
            "Edit Category".to_string()
        } else {
            "New Category".to_string()
        }
    });

    view! {
        <ModalFrame title=title on_close=Callback::new(move |_| form.close())>
            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                form.submit();
            }>
                <div class="form-group">
                    <label>"Category name"</label>
                    <input
                        type="text"
                        placeholder="e.g. Electronics"
                        prop:value=move || state.with(|s| s.draft.name.clone())
                        on:input=move |ev| {
                            form.edit("name", |d| d.name = event_target_value(&ev))
                        }
                    />
                    {move || {
                        form.error_for("name").map(|e| view! { <div class="form-error">{e}</div> })
                    }}
                </div>

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
                                "Create category"
                            }
                        }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
