//! Login page with email + password and a client/provider toggle.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{LoginRequest, Role};
use crate::paths;
use crate::state::notifications::{Notifications, notify_error, notify_success};
use crate::state::session::BrowserSessionStore;

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Please fill in all fields.";

/// Require both credentials. Only the email is trimmed; the password is sent as typed.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSessionStore>>();
    let toasts = expect_context::<RwSignal<Notifications>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Client);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                notify_error(toasts, msg);
                return;
            }
        };
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let req = LoginRequest {
                email: email_value,
                password: password_value,
                user_type: role.get_untracked().user_type().to_owned(),
            };
            match crate::net::api::login(&req).await {
                Ok(resp) => {
                    let home = resp.user.role.home_path();
                    session.update(|s| s.login(resp.user, resp.token));
                    notify_success(toasts, "Signed in.");
                    navigate(home, NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    notify_error(toasts, "Authentication failed. Check your details.");
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <RoleToggle role/>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "No account yet? " <a href=paths::REGISTER>"Create one"</a>
                </p>
            </div>
        </div>
    }
}

/// Segmented control choosing between the client and provider account types.
#[component]
pub fn RoleToggle(role: RwSignal<Role>) -> impl IntoView {
    let option = move |value: Role| {
        view! {
            <button
                type="button"
                class="role-toggle__option"
                class:role-toggle__option--active=move || role.get() == value
                on:click=move |_| role.set(value)
            >
                {value.label()}
            </button>
        }
    };

    view! {
        <div class="role-toggle">
            {option(Role::Client)}
            {option(Role::Provider)}
        </div>
    }
}
