use contracts::domain::role::Role;
use contracts::domain::user::{User, UserDraft};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::role;
use crate::domain::user::api::UserGateway;
use crate::domain::user::fallback::sample_users;
use crate::domain::user::ui::details::UserDetails;
use crate::shared::components::degraded_banner::DegradedBanner;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_box::SearchBox;
use crate::shared::confirm;
use crate::shared::form::FormController;
use crate::shared::gateway::EntityGateway;
use crate::shared::icons::icon;
use crate::shared::list::ListController;
use crate::shared::toast::ToastService;

fn initial(value: &str) -> String {
    value.chars().next().map(String::from).unwrap_or_default()
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let list = ListController::new(UserGateway, sample_users());
    let form = FormController::new(UserGateway, list, toasts, "User");
    let state = list.state;

    // Read-only role snapshot for the picker, with its own demo fallback.
    let available_roles = RwSignal::new(Vec::<Role>::new());
    spawn_local(async move {
        match role::api::fetch_roles().await {
            Ok(roles) => available_roles.set(roles),
            Err(_) => available_roles.set(role::fallback::sample_roles()),
        }
    });

    on_cleanup(move || list.cancel());
    list.load(1);

    let handle_create = move |_| {
        // New users always get a password pair; editing never shows one.
        form.open_create_with(UserDraft {
            set_password: true,
            ..Default::default()
        });
    };

    let handle_edit = move |user: &User| {
        form.open_edit(UserDraft::from_entity(user));
    };

    let handle_delete = move |user: User| {
        if !confirm(&format!("Delete user \"{}\"?", user.name)) {
            return;
        }
        spawn_local(async move {
            match UserGateway.delete(user.id).await {
                Ok(()) => {
                    toasts.success("Success", "User deleted");
                    list.refresh();
                }
                Err(e) => {
                    toasts.error("Error", &e);
                }
            }
        });
    };

    let render_row = move |user: User| {
        let for_edit = user.clone();
        let for_delete = user.clone();
        let initials = format!("{}{}", initial(&user.name), initial(&user.lastname));
        let full_name = format!("{} {}", user.name, user.lastname);
        let handle = format!("@{}", user.username);
        let roles = user
            .roles
            .iter()
            .map(|r| r.name.clone())
            .collect::<Vec<_>>()
            .join(", ");
        let badge_class = if user.active {
            "badge badge--success"
        } else {
            "badge badge--danger"
        };
        view! {
            <tr class="table__row">
                <td>
                    <div class="user-cell">
                        <div class="avatar avatar--sm">{initials}</div>
                        <div>
                            <div class="user-cell__name">{full_name}</div>
                            <div class="user-cell__handle">{handle}</div>
                        </div>
                    </div>
                </td>
                <td>{user.email.clone()}</td>
                <td>{roles}</td>
                <td>
                    <span class=badge_class>
                        {if user.active { "Active" } else { "Inactive" }}
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
                    <h1 class="page-title">"Users"</h1>
                    <p class="page-subtitle">"Manage system users"</p>
                </div>
                <button class="button button--primary" on:click=handle_create>
                    {icon("plus")}
                    "New User"
                </button>
            </div>

            <div class="page-filters">
                <SearchBox
                    value=Signal::derive(move || state.with(|s| s.search_term.clone()))
                    on_change=Callback::new(move |term| list.set_search_term(term))
                    placeholder="Search users..."
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
                            <th>"Email"</th>
                            <th>"Roles"</th>
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
                    <div class="table-empty">"No users found"</div>
                </Show>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.current_page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                on_page_change=Callback::new(move |page| list.change_page(page))
            />

            <Show when=move || form.is_open()>
                <UserDetails form=form available_roles=available_roles />
            </Show>
        </div>
    }
}
