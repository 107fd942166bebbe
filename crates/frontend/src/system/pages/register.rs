use contracts::shared::validation::{is_valid_email, FieldErrors};
use contracts::system::auth::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::toast::ToastService;
use crate::system::auth::context::use_session;

#[component]
pub fn RegisterPage(on_login: Callback<()>) -> impl IntoView {
    let session = use_session();
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (name, set_name) = signal(String::new());
    let (lastname, set_lastname) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (birthday, set_birthday) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::new());
    let (api_message, set_api_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    // Self-registration applies the lighter public rules; the stricter
    // password policy belongs to user management.
    let validate = move || {
        let mut next = FieldErrors::new();
        if name.get().trim().is_empty() {
            next.insert("name".into(), "Name is required".into());
        }
        if lastname.get().trim().is_empty() {
            next.insert("lastname".into(), "Last name is required".into());
        }
        let username_val = username.get();
        if username_val.trim().is_empty() {
            next.insert("username".into(), "Username is required".into());
        } else if username_val.len() < 3 {
            next.insert(
                "username".into(),
                "Username must be at least 3 characters".into(),
            );
        }
        let email_val = email.get();
        if email_val.is_empty() {
            next.insert("email".into(), "Email is required".into());
        } else if !is_valid_email(&email_val) {
            next.insert("email".into(), "Invalid email".into());
        }
        let password_val = password.get();
        if password_val.is_empty() {
            next.insert("password".into(), "Password is required".into());
        } else if password_val.len() < 6 {
            next.insert(
                "password".into(),
                "Password must be at least 6 characters".into(),
            );
        }
        if password_val != confirm_password.get() {
            next.insert("confirmPassword".into(), "Passwords do not match".into());
        }
        if birthday.get().is_empty() {
            next.insert("birthday".into(), "Birthday is required".into());
        }
        next
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let next = validate();
        if !next.is_empty() {
            set_errors.set(next);
            return;
        }
        set_errors.set(FieldErrors::new());

        let request = RegisterRequest {
            name: name.get(),
            lastname: lastname.get(),
            username: username.get(),
            email: email.get(),
            birthday: birthday.get(),
            password: password.get(),
            password_repeat: password.get(),
        };

        set_is_loading.set(true);
        set_api_message.set(None);

        spawn_local(async move {
            match session.register(&request).await {
                Ok(()) => {
                    toasts.success("Registration successful!", "You can sign in now");
                    on_login.run(());
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

    let text_input = move |id: &'static str,
                          label: &'static str,
                          input_type: &'static str,
                          value: ReadSignal<String>,
                          setter: WriteSignal<String>| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type=input_type
                    id=id
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        setter.set(event_target_value(&ev));
                        set_errors.update(|e| {
                            e.remove(id);
                        });
                    }
                    disabled=move || is_loading.get()
                />
                {move || field_error(id).map(|e| view! { <div class="form-error">{e}</div> })}
            </div>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-logo">
                    <span class="auth-logo__icon">"📦"</span>
                    <span class="auth-logo__text">"Inventory Manager"</span>
                </div>

                <h1 class="auth-title">"Create an account"</h1>
                <p class="auth-subtitle">"Fill in the form to register"</p>

                <Show when=move || api_message.get().is_some()>
                    <div class="auth-error">{move || api_message.get().unwrap_or_default()}</div>
                </Show>

                <form class="auth-form" on:submit=on_submit>
                    <div class="form-row">
                        {text_input("name", "Name", "text", name, set_name)}
                        {text_input("lastname", "Last name", "text", lastname, set_lastname)}
                    </div>
                    <div class="form-row">
                        {text_input("username", "Username", "text", username, set_username)}
                        {text_input("email", "Email", "email", email, set_email)}
                    </div>
                    {text_input("birthday", "Birthday", "date", birthday, set_birthday)}
                    {text_input("password", "Password", "password", password, set_password)}
                    {text_input(
                        "confirmPassword",
                        "Confirm password",
                        "password",
                        confirm_password,
                        set_confirm_password,
                    )}

                    <button
                        type="submit"
                        class="button button--primary auth-submit"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>

                <div class="auth-footer">
                    <span>"Already registered? "</span>
                    <button class="auth-link" on:click=move |_| on_login.run(())>
                        "Sign in"
                    </button>
                </div>
            </div>
        </div>
    }
}
