//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{RegisterRequest, Role};
use crate::pages::login::RoleToggle;
use crate::paths;
use crate::state::notifications::{Notifications, notify_error, notify_success};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";
pub const INVALID_NIF_MESSAGE: &str = "The NIF must contain exactly 9 digits.";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "The passwords do not match.";

/// A taxpayer number is exactly nine ASCII digits.
pub fn is_valid_nif(raw: &str) -> bool {
    raw.len() == 9 && raw.bytes().all(|b| b.is_ascii_digit())
}

/// Raw registration form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub nif: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Check the form and build the request.
///
/// # Errors
///
/// Returns the user-facing message for the first failing rule: missing
/// fields, then NIF shape, then password confirmation.
pub fn validate_registration(form: &RegistrationForm, role: Role) -> Result<RegisterRequest, &'static str> {
    let name = form.name.trim();
    let nif = form.nif.trim();
    let email = form.email.trim();
    if name.is_empty()
        || nif.is_empty()
        || email.is_empty()
        || form.password.is_empty()
        || form.confirm_password.is_empty()
    {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    if !is_valid_nif(nif) {
        return Err(INVALID_NIF_MESSAGE);
    }
    if form.password != form.confirm_password {
        return Err(PASSWORD_MISMATCH_MESSAGE);
    }
    Ok(RegisterRequest {
        name: name.to_owned(),
        nif: nif.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        role,
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<Notifications>>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegistrationForm::default());
    let role = RwSignal::new(Role::Client);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let req = match form.with(|f| validate_registration(f, role.get())) {
            Ok(req) => req,
            Err(msg) => {
                notify_error(toasts, msg);
                return;
            }
        };
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&req).await {
                Ok(()) => {
                    notify_success(toasts, "Registration complete. You can sign in now.");
                    navigate(paths::LOGIN, NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("registration failed: {e}");
                    let detail = e.user_message("Something went wrong. Please try again.");
                    notify_error(toasts, format!("Registration failed: {detail}"));
                }
            }
            busy.set(false);
        });
    };

    let input = move |kind: &'static str,
                      placeholder: &'static str,
                      read: fn(&RegistrationForm) -> String,
                      apply: fn(&mut RegistrationForm, String)| {
        view! {
            <input
                class="auth-input"
                type=kind
                placeholder=placeholder
                prop:value=move || form.with(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| apply(f, value));
                }
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <RoleToggle role/>
                <form class="auth-form" on:submit=on_submit>
                    {input("text", "Full name", |f| f.name.clone(), |f, v| f.name = v)}
                    {input("text", "NIF", |f| f.nif.clone(), |f, v| f.nif = v)}
                    {input("email", "you@example.com", |f| f.email.clone(), |f, v| f.email = v)}
                    {input("password", "Password", |f| f.password.clone(), |f, v| f.password = v)}
                    {input("password", "Confirm password", |f| f.confirm_password.clone(), |f, v| f.confirm_password = v)}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Create account" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already registered? " <a href=paths::LOGIN>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
