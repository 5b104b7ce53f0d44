//! Login Page
//!
//! Collects credentials and exchanges them for an access token.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::FieldError;
use crate::error::FieldErrors;
use crate::routes::{use_router, Route};
use crate::validation::validate_credentials;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let error_for = move |name: &'static str| Signal::derive(move || errors.with(|e| e.get(name).map(str::to_string)));

    let on_input = move |name: &'static str, value: String| {
        match name {
            "username" => set_username.set(value),
            _ => set_password.set(value),
        }
        if errors.with_untracked(|e| e.get(name).is_some()) {
            errors.update(|e| {
                e.clear(name);
            });
        }
        set_error.set(String::new());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked();
        let pass = password.get_untracked();

        let field_errors = validate_credentials(&user, &pass);
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }

        set_loading.set(true);
        let auth = auth.clone();
        spawn_local(async move {
            let result = auth.login(user.trim(), &pass).await;
            set_loading.try_set(false);
            match result {
                Ok(()) => router.navigate(Route::Tasks),
                Err(message) => {
                    set_error.try_set(message);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"Login"</h1>
            <form class="login-form" on:submit=on_submit>
                <div class="form-field">
                    <input
                        type="text"
                        name="username"
                        placeholder="Username"
                        autocomplete="username"
                        class="form-field-input"
                        prop:value=move || username.get()
                        on:input=move |ev| on_input("username", event_target_value(&ev))
                    />
                    <FieldError error=error_for("username") />
                </div>
                <div class="form-field">
                    <input
                        type="password"
                        name="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        class="form-field-input"
                        prop:value=move || password.get()
                        on:input=move |ev| on_input("password", event_target_value(&ev))
                    />
                    <FieldError error=error_for("password") />
                </div>
                <button type="submit" class="login-button" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>
            <Show when=move || !error.get().is_empty()>
                <div class="login-error">{move || error.get()}</div>
            </Show>
        </div>
    }
}
