use chrono::NaiveDate;
use contracts::system::auth::ChangePasswordRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::shared::validation::is_valid_password;

use crate::shared::toast::ToastService;
use crate::system::auth::api;
use crate::system::auth::context::use_session;

/// Edits the session user's own record and offers the password-change flow.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let state = session.state();

    let current = state.with_untracked(|s| s.user.clone());

    let (name, set_name) = signal(current.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let (lastname, set_lastname) = signal(
        current
            .as_ref()
            .map(|u| u.lastname.clone())
            .unwrap_or_default(),
    );
    let (email, set_email) = signal(
        current
            .as_ref()
            .map(|u| u.email.clone())
            .unwrap_or_default(),
    );
    let (birthday, set_birthday) = signal(
        current
            .as_ref()
            .and_then(|u| u.birthday)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
    );

    let (current_password, set_current_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (saving_password, set_saving_password) = signal(false);

    let save_profile = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(mut user) = state.with_untracked(|s| s.user.clone()) else {
            return;
        };
        user.name = name.get();
        user.lastname = lastname.get();
        user.email = email.get();
        if let Ok(date) = NaiveDate::parse_from_str(birthday.get().trim(), "%Y-%m-%d") {
            user.birthday = Some(date);
        }
        session.update_user(user);
        toasts.success("Profile updated", "Your details have been saved");
    };

    let change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let new_val = new_password.get();
        if new_val != confirm_password.get() {
            toasts.error("Error", "New passwords do not match");
            return;
        }
        if !is_valid_password(&new_val) {
            toasts.error(
                "Error",
                "Password must be 8-35 characters with uppercase, lowercase, a digit and a symbol",
            );
            return;
        }
        let request = ChangePasswordRequest {
            current_password: current_password.get(),
            new_password: new_val,
            confirm_password: confirm_password.get(),
        };
        set_saving_password.set(true);
        spawn_local(async move {
            match api::change_password(&request).await {
                Ok(()) => {
                    toasts.success("Password updated", "Your password has been changed");
                    set_current_password.set(String::new());
                    set_new_password.set(String::new());
                    set_confirm_password.set(String::new());
                }
                Err(e) => {
                    toasts.error("Error", &e);
                }
            }
            set_saving_password.set(false);
        });
    };

    let initials = move || {
        state
            .get()
            .user
            .map(|u| {
                let mut out = String::new();
                out.extend(u.name.chars().next());
                out.extend(u.lastname.chars().next());
                out
            })
            .unwrap_or_default()
    };
    let full_name = move || {
        state
            .get()
            .user
            .map(|u| format!("{} {}", u.name, u.lastname))
            .unwrap_or_default()
    };
    let subtitle = move || {
        state
            .get()
            .user
            .map(|u| {
                let role = u
                    .roles
                    .first()
                    .map(|r| r.name.clone())
                    .unwrap_or_else(|| "User".to_string());
                format!("@{} · {}", u.username, role)
            })
            .unwrap_or_default()
    };

    view! {
        <div class="content">
            <div class="profile-header">
                <div class="avatar avatar--xl">{initials}</div>
                <div class="profile-header__info">
                    <h1>{full_name}</h1>
                    <p>{subtitle}</p>
                </div>
            </div>

            <div class="profile-grid">
                <section class="card">
                    <h2 class="card__title">"Personal information"</h2>
                    <form on:submit=save_profile>
                        <div class="form-row">
                            <div class="form-group">
                                <label>"Name"</label>
                                <input
                                    type="text"
                                    prop:value=move || name.get()
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label>"Last name"</label>
                                <input
                                    type="text"
                                    prop:value=move || lastname.get()
                                    on:input=move |ev| set_lastname.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div class="form-row">
                            <div class="form-group">
                                <label>"Email"</label>
                                <input
                                    type="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label>"Birthday"</label>
                                <input
                                    type="date"
                                    prop:value=move || birthday.get()
                                    on:input=move |ev| set_birthday.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <button type="submit" class="button button--primary">
                            "Save changes"
                        </button>
                    </form>
                </section>

                <section class="card">
                    <h2 class="card__title">"Change password"</h2>
                    <form on:submit=change_password>
                        <div class="form-group">
                            <label>"Current password"</label>
                            <input
                                type="password"
                                autocomplete="current-password"
                                prop:value=move || current_password.get()
                                on:input=move |ev| {
                                    set_current_password.set(event_target_value(&ev))
                                }
                            />
                        </div>
                        <div class="form-group">
                            <label>"New password"</label>
                            <input
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || new_password.get()
                                on:input=move |ev| set_new_password.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Confirm new password"</label>
                            <input
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || confirm_password.get()
                                on:input=move |ev| {
                                    set_confirm_password.set(event_target_value(&ev))
                                }
                            />
                        </div>
                        <button
                            type="submit"
                            class="button button--secondary"
                            disabled=move || saving_password.get()
                        >
                            {move || {
                                if saving_password.get() { "Saving..." } else { "Change password" }
                            }}
                        </button>
                    </form>
                </section>
            </div>
        </div>
    }
}
