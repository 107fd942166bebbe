use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::toast::ToastService;
use crate::system::auth::context::use_session;

#[component]
pub fn LoginPage(on_register: Callback<()>) -> impl IntoView {
    let session = use_session();
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::new());
    let (api_message, set_api_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut next = FieldErrors::new();
        if username.get().trim().is_empty() {
            next.insert("username".into(), "Username is required".into());
        }
        if password.get().is_empty() {
            next.insert("password".into(), "Password is required".into());
        }
        if !next.is_empty() {
            set_errors.set(next);
            return;
        }
        set_errors.set(FieldErrors::new());

        let username_val = username.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_api_message.set(None);

        spawn_local(async move {
            match session.login(username_val, password_val).await {
                Ok(()) => {
                    // Session change flips the route guard to the dashboard.
                    toasts.success("Welcome back!", "Signed in successfully");
                }
                Err(e) => {
                    toasts.error("Error", &e);
                    set_api_message.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    };

    let field_error = move |field: &'static str| errors.get().get(field).cloned();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-logo">
                    <span class="auth-logo__icon">"📦"</span>
                    <span class="auth-logo__text">"Inventory Manager"</span>
                </div>

                <h1 class="auth-title">"Welcome back"</h1>
                <p class="auth-subtitle">"Enter your credentials to access your account"</p>

                <Show when=move || api_message.get().is_some()>
                    <div class="auth-error">{move || api_message.get().unwrap_or_default()}</div>
                </Show>

                <form class="auth-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="your username"
                            prop:value=move || username.get()
                            on:input=move |ev| {
                                set_username.set(event_target_value(&ev));
                                set_errors.update(|e| {
                                    e.remove("username");
                                });
                            }
                            disabled=move || is_loading.get()
                        />
                        {move || {
                            field_error("username")
                                .map(|e| view! { <div class="form-error">{e}</div> })
                        }}
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                set_password.set(event_target_value(&ev));
                                set_errors.update(|e| {
                                    e.remove("password");
                                });
                            }
                            disabled=move || is_loading.get()
                        />
                        {move || {
                            field_error("password")
                                .map(|e| view! { <div class="form-error">{e}</div> })
                        }}
                    </div>

                    <button
                        type="submit"
                        class="button button--primary auth-submit"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="auth-footer">
                    <span>"No account yet? "</span>
                    <button class="auth-link" on:click=move |_| on_register.run(())>
                        "Create one"
                    </button>
                </div>
            </div>
        </div>
    }
}
