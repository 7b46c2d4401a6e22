//! Provider form for publishing a new service, plus the field validation the
//! edit dialog shares.

#[cfg(test)]
#[path = "service_form_test.rs"]
mod service_form_test;

use leptos::prelude::*;

use crate::net::types::NewService;
use crate::state::notifications::{Notifications, notify_error, notify_success};
use crate::state::session::BrowserSessionStore;

pub const MISSING_FIELDS_MESSAGE: &str = "Fill in the company name, service name, and description.";
pub const INVALID_PRICE_MESSAGE: &str = "Enter a valid price.";
pub const INVALID_SLOTS_MESSAGE: &str = "Enter a valid number of slots.";

/// Validated editable fields of a service.
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceFields {
    pub company_name: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl ServiceFields {
    pub fn into_new_service(self, provider_id: String) -> NewService {
        NewService {
            company_name: self.company_name,
            name: self.name,
            description: self.description,
            price: self.price,
            provider_id,
        }
    }
}

/// Trim and check the service fields. Price must be a non-negative number.
///
/// # Errors
///
/// Returns the user-facing message for the first failing field.
pub fn validate_service_form(
    company_name: &str,
    name: &str,
    description: &str,
    price: &str,
) -> Result<ServiceFields, &'static str> {
    let company_name = company_name.trim();
    let name = name.trim();
    let description = description.trim();
    if company_name.is_empty() || name.is_empty() || description.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    let price = match price.trim().parse::<f64>() {
        Ok(p) if p.is_finite() && p >= 0.0 => p,
        _ => return Err(INVALID_PRICE_MESSAGE),
    };
    Ok(ServiceFields {
        company_name: company_name.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        price,
    })
}

/// Parse an available-slots field as a non-negative integer.
///
/// # Errors
///
/// Returns [`INVALID_SLOTS_MESSAGE`] for blanks, fractions, and negatives.
pub fn parse_slots(raw: &str) -> Result<i64, &'static str> {
    match raw.trim().parse::<i64>() {
        Ok(slots) if slots >= 0 => Ok(slots),
        _ => Err(INVALID_SLOTS_MESSAGE),
    }
}

/// Create-service form. `on_created` fires after the API accepts the service.
#[component]
pub fn ServiceForm(on_created: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSessionStore>>();
    let toasts = expect_context::<RwSignal<Notifications>>();

    let company_name = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let fields = match validate_service_form(&company_name.get(), &name.get(), &description.get(), &price.get()) {
            Ok(fields) => fields,
            Err(msg) => {
                notify_error(toasts, msg);
                return;
            }
        };
        let Some(provider_id) = session.with_untracked(|s| s.current_user().map(|u| u.id)) else {
            notify_error(toasts, "Could not identify the signed-in provider.");
            return;
        };

        busy.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::create_service(&fields.into_new_service(provider_id)).await {
                Ok(()) => {
                    notify_success(toasts, "Service created.");
                    company_name.set(String::new());
                    name.set(String::new());
                    description.set(String::new());
                    price.set(String::new());
                    on_created.run(());
                }
                Err(e) => {
                    log::warn!("service creation failed: {e}");
                    notify_error(toasts, e.user_message("Could not create the service."));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <form class="service-form" on:submit=on_submit>
            <input
                class="service-form__input"
                type="text"
                placeholder="Company name"
                prop:value=move || company_name.get()
                on:input=move |ev| company_name.set(event_target_value(&ev))
            />
            <input
                class="service-form__input"
                type="text"
                placeholder="Service name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                class="service-form__input"
                type="text"
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            />
            <input
                class="service-form__input"
                type="number"
                min="0"
                placeholder="Price"
                prop:value=move || price.get()
                on:input=move |ev| price.set(event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Create service"
            </button>
        </form>
    }
}
