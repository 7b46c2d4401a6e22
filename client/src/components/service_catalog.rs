//! Client-facing service catalogue with search and reservations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists every published service. Reserving one charges the client, so a
//! successful booking writes the balance the API returns back into the stored
//! user and refetches the catalogue for fresh slot counts.

#[cfg(test)]
#[path = "service_catalog_test.rs"]
mod service_catalog_test;

use leptos::prelude::*;

use crate::net::types::{BookingRequest, Service};
use crate::state::notifications::{Notifications, notify_error, notify_success};
use crate::state::session::BrowserSessionStore;
use crate::util::dates::validate_date_input;

/// Services whose name contains `query`, ignoring case. A blank query keeps all.
pub fn filter_services(services: &[Service], query: &str) -> Vec<Service> {
    let needle = query.trim().to_lowercase();
    services
        .iter()
        .filter(|service| needle.is_empty() || service.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn is_bookable(service: &Service) -> bool {
    service.available_slots > 0
}

#[component]
pub fn ServiceCatalog() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSessionStore>>();
    let toasts = expect_context::<RwSignal<Notifications>>();

    let services = LocalResource::new(crate::net::api::fetch_all_services);
    let query = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<Service>);
    let date = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let confirm = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let Some(service) = selected.get_untracked() else {
            return;
        };
        let Some(client_id) = session.with_untracked(|s| s.current_user().map(|u| u.id)) else {
            notify_error(toasts, "Could not identify the signed-in user.");
            return;
        };
        let reservation_date = match validate_date_input(&date.get_untracked()) {
            Ok(d) => d,
            Err(msg) => {
                notify_error(toasts, msg);
                return;
            }
        };

        busy.set(true);
        leptos::task::spawn_local(async move {
            let req = BookingRequest { client_id, service_id: service.id, reservation_date };
            match crate::net::api::create_booking(&req).await {
                Ok(resp) => {
                    if let Some(balance) = resp.balance {
                        session.update(|s| {
                            s.refresh_user(|user| user.balance = balance);
                        });
                    }
                    notify_success(toasts, "Booking confirmed.");
                    date.set(String::new());
                    selected.set(None);
                    services.refetch();
                }
                Err(e) => {
                    log::warn!("booking failed: {e}");
                    notify_error(toasts, e.user_message("Could not complete the booking."));
                }
            }
            busy.set(false);
        });
    });

    view! {
        <section class="catalog">
            <input
                class="catalog__search"
                type="text"
                placeholder="Search for a service"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />

            <Suspense fallback=move || view! { <p class="catalog__loading">"Loading services..."</p> }>
                {move || {
                    services
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                let visible = filter_services(&list, &query.get());
                                if visible.is_empty() {
                                    view! { <p class="catalog__empty">"No services found."</p> }.into_any()
                                } else {
                                    visible
                                        .into_iter()
                                        .map(|service| view! { <ServiceCard service selected/> })
                                        .collect_view()
                                        .into_any()
                                }
                            }
                            Err(e) => {
                                view! {
                                    <p class="catalog__empty">{e.user_message("Could not load services.")}</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>

        <Show when=move || selected.with(Option::is_some)>
            <div class="dialog-backdrop" on:click=move |_| selected.set(None)>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Confirm Booking"</h2>
                    <p>{move || selected.with(|s| s.as_ref().map(|s| s.name.clone()).unwrap_or_default())}</p>
                    <label class="dialog__label">
                        "Reservation date"
                        <input
                            class="dialog__input"
                            type="date"
                            prop:value=move || date.get()
                            on:input=move |ev| date.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| selected.set(None)>"Cancel"</button>
                        <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| confirm.run(())>
                            "Confirm"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ServiceCard(service: Service, selected: RwSignal<Option<Service>>) -> impl IntoView {
    let bookable = is_bookable(&service);
    let status = if bookable { "Available" } else { "Unavailable" };
    let status_class = if bookable { "catalog__status catalog__status--open" } else { "catalog__status" };
    let name = service.name.clone();
    let company = service.company_name.clone();
    let description = service.description.clone();
    let price = service.price;

    view! {
        <article class="catalog__card">
            <div class="catalog__info">
                <h3 class="catalog__name">{name}</h3>
                <p class="catalog__company">"Company: " {company}</p>
                <p class="catalog__description">{description}</p>
                <p>"Price: " {format!("{price} KZ")}</p>
                <p>"Status: " <span class=status_class>{status}</span></p>
            </div>
            <button
                class="btn btn--primary"
                disabled=!bookable
                on:click=move |_| selected.set(Some(service.clone()))
            >
                "Reserve"
            </button>
        </article>
    }
}
