use contracts::domain::role::Role;
use leptos::prelude::*;

use crate::domain::user::api::UserGateway;
use crate::shared::components::modal_frame::ModalFrame;
use crate::shared::form::FormController;
use crate::shared::icons::icon;

#[component]
pub fn UserDetails(
    form: FormController<UserGateway>,
    available_roles: RwSignal<Vec<Role>>,
) -> impl IntoView {
    let state = form.state;
    let title = Signal::derive(move || {
        if form.is_editing() {
            "Edit User".to_string()
        } else {
            "New User".to_string()
        }
    });

    let picker_value = RwSignal::new(String::new());

    let handle_add_role = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        picker_value.set(String::new());
        let Ok(id) = value.parse::<i64>() else {
            return;
        };
        let Some(role) =
            available_roles.with_untracked(|all| all.iter().find(|r| r.id == id).cloned())
        else {
            return;
        };
        form.edit("roles", |d| d.add_role(role));
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
                        <label>"Last name"</label>
                        <input
                            type="text"
                            prop:value=move || state.with(|s| s.draft.lastname.clone())
                            on:input=move |ev| {
                                form.edit("lastname", |d| d.lastname = event_target_value(&ev))
                            }
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label>"Username"</label>
                        <input
                            type="text"
                            prop:value=move || state.with(|s| s.draft.username.clone())
                            on:input=move |ev| {
                                form.edit("username", |d| d.username = event_target_value(&ev))
                            }
                        />
                        {move || {
                            form.error_for("username")
                                .map(|e| view! { <div class="form-error">{e}</div> })
                        }}
                    </div>
                    <div class="form-group">
                        <label>"Email"</label>
                        <input
                            type="email"
                            prop:value=move || state.with(|s| s.draft.email.clone())
                            on:input=move |ev| {
                                form.edit("email", |d| d.email = event_target_value(&ev))
                            }
                        />
                        {move || {
                            form.error_for("email")
                                .map(|e| view! { <div class="form-error">{e}</div> })
                        }}
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label>"Birthday"</label>
                        <input
                            type="date"
                            prop:value=move || state.with(|s| s.draft.birthday.clone())
                            on:input=move |ev| {
                                form.edit("birthday", |d| d.birthday = event_target_value(&ev))
                            }
                        />
                        {move || {
                            form.error_for("birthday")
                                .map(|e| view! { <div class="form-error">{e}</div> })
                        }}
                    </div>
                    <div class="form-group">
                        <label>"Status"</label>
                        <select
                            prop:value=move || {
                                state.with(|s| s.draft.active.to_string())
                            }
                            on:change=move |ev| {
                                let active = event_target_value(&ev) == "true";
                                form.edit("active", move |d| d.active = active);
                            }
                        >
                            <option value="true">"Active"</option>
                            <option value="false">"Inactive"</option>
                        </select>
                    </div>
                </div>

                <div class="form-group">
                    <label>"Add role"</label>
                    <select prop:value=move || picker_value.get() on:change=handle_add_role>
                        <option value="">"Select a role"</option>
                        <For
                            each=move || available_roles.get()
                            key=|role| role.id
                            children=move |role| {
                                view! {
                                    <option value=role.id.to_string()>{role.name.clone()}</option>
                                }
                            }
                        />
                    </select>
                    {move || {
                        form.error_for("roles")
                            .map(|e| view! { <div class="form-error">{e}</div> })
                    }}
                </div>

                <Show when=move || state.with(|s| !s.draft.roles.is_empty())>
                    <div class="chip-list">
                        <For
                            each=move || state.with(|s| s.draft.roles.clone())
                            key=|role| role.id
                            children=move |role| {
                                let id = role.id;
                                view! {
                                    <span class="chip">
                                        {role.name.clone()}
                                        <button
                                            type="button"
                                            class="chip__remove"
                                            on:click=move |_| {
                                                form.edit("roles", |d| d.remove_role(id))
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

                <Show when=move || state.with(|s| s.draft.set_password)>
                    <div class="form-row">
                        <div class="form-group">
                            <label>"Password"</label>
                            <input
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || state.with(|s| s.draft.password.clone())
                                on:input=move |ev| {
                                    form.edit("password", |d| d.password = event_target_value(&ev))
                                }
                            />
                        </div>
                        <div class="form-group">
                            <label>"Confirm password"</label>
                            <input
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || {
                                    state.with(|s| s.draft.password_repeat.clone())
                                }
                                on:input=move |ev| {
                                    form.edit(
                                        "password",
                                        |d| d.password_repeat = event_target_value(&ev),
                                    )
                                }
                            />
                        </div>
                    </div>
                    {move || {
                        form.error_for("password")
                            .map(|e| view! { <div class="form-error">{e}</div> })
                    }}
                </Show>

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
                                "Create user"
                            }
                        }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
