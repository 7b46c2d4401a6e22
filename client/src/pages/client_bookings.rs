//! Client booking history with reschedule and cancel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Bookings are listed for the signed-in client. Rescheduling and deleting go
//! straight to the API and then refetch; neither touches the stored balance.

#[cfg(test)]
#[path = "client_bookings_test.rs"]
mod client_bookings_test;

use leptos::prelude::*;

use crate::components::client_header::ClientHeader;
use crate::components::require_session::RequireSession;
use crate::net::types::ClientBooking;
use crate::state::notifications::{Notifications, notify_error, notify_success};
use crate::state::session::BrowserSessionStore;
use crate::util::dates::{format_date, validate_date_input};

/// Display columns for one booking; missing services render as `N/A`.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingRow {
    pub id: String,
    pub service_name: String,
    pub description: String,
    pub price: String,
    pub reservation_date: String,
}

impl From<&ClientBooking> for BookingRow {
    fn from(booking: &ClientBooking) -> Self {
        let service = booking.service.as_ref();
        Self {
            id: booking.id.clone(),
            service_name: service.map_or_else(|| "N/A".to_owned(), |s| s.name.clone()),
            description: service.map_or_else(|| "N/A".to_owned(), |s| s.description.clone()),
            price: service.map_or_else(|| "N/A".to_owned(), |s| format!("{} KZ", s.price)),
            reservation_date: format_date(&booking.reservation_date),
        }
    }
}

#[component]
pub fn ClientBookingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSessionStore>>();
    let toasts = expect_context::<RwSignal<Notifications>>();

    let bookings = LocalResource::new(move || {
        let client_id = session.with(|s| s.current_user().map(|u| u.id));
        async move {
            let Some(client_id) = client_id else {
                return Ok(Vec::new());
            };
            crate::net::api::fetch_client_bookings(&client_id).await
        }
    });

    let rescheduling = RwSignal::new(None::<String>);
    let new_date = RwSignal::new(String::new());
    let deleting = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let confirm_reschedule = Callback::new(move |()| {
        let Some(booking_id) = rescheduling.get_untracked() else {
            return;
        };
        let date = match validate_date_input(&new_date.get_untracked()) {
            Ok(date) => date,
            Err(msg) => {
                notify_error(toasts, msg);
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::reschedule_booking(&booking_id, &date).await {
                Ok(()) => {
                    notify_success(toasts, "Reservation date updated.");
                    rescheduling.set(None);
                    new_date.set(String::new());
                    bookings.refetch();
                }
                Err(e) => {
                    log::warn!("reschedule failed: {e}");
                    notify_error(toasts, e.user_message("Could not update the reservation date."));
                }
            }
            busy.set(false);
        });
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(booking_id) = deleting.get_untracked() else {
            return;
        };
        let Some(client_id) = session.with_untracked(|s| s.current_user().map(|u| u.id)) else {
            notify_error(toasts, "Could not identify the signed-in user.");
            return;
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_booking(&booking_id, &client_id).await {
                Ok(()) => {
                    notify_success(toasts, "Booking deleted.");
                    bookings.refetch();
                }
                Err(e) => {
                    log::warn!("booking delete failed: {e}");
                    notify_error(toasts, e.user_message("Could not delete the booking."));
                }
            }
            deleting.set(None);
            busy.set(false);
        });
    });

    view! {
        <RequireSession>
            <div class="page page--client">
                <ClientHeader/>
                <main class="page__body">
                    <h2>"My bookings"</h2>
                    <Suspense fallback=move || view! { <p>"Loading bookings..."</p> }>
                        {move || {
                            bookings
                                .get()
                                .map(|result| match result {
                                    Ok(list) if list.is_empty() => {
                                        view! { <p class="page__empty">"No bookings yet."</p> }.into_any()
                                    }
                                    Ok(list) => {
                                        let rows = list.iter().map(BookingRow::from).collect::<Vec<_>>();
                                        view! { <BookingTable rows rescheduling deleting/> }.into_any()
                                    }
                                    Err(e) => {
                                        view! {
                                            <p class="page__empty">{e.user_message("Could not load your bookings.")}</p>
                                        }
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </main>
            </div>

            <Show when=move || rescheduling.with(Option::is_some)>
                <div class="dialog-backdrop" on:click=move |_| rescheduling.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Change reservation date"</h2>
                        <label class="dialog__label">
                            "New date"
                            <input
                                class="dialog__input"
                                type="date"
                                prop:value=move || new_date.get()
                                on:input=move |ev| new_date.set(event_target_value(&ev))
                            />
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| rescheduling.set(None)>"Cancel"</button>
                            <button
                                class="btn btn--primary"
                                disabled=move || busy.get()
                                on:click=move |_| confirm_reschedule.run(())
                            >
                                "Save"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || deleting.with(Option::is_some)>
                <div class="dialog-backdrop" on:click=move |_| deleting.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Delete booking"</h2>
                        <p>"Are you sure you want to delete this booking?"</p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| deleting.set(None)>"Cancel"</button>
                            <button
                                class="btn btn--danger"
                                disabled=move || busy.get()
                                on:click=move |_| confirm_delete.run(())
                            >
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </RequireSession>
    }
}

#[component]
fn BookingTable(
    rows: Vec<BookingRow>,
    rescheduling: RwSignal<Option<String>>,
    deleting: RwSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Service"</th>
                    <th>"Description"</th>
                    <th>"Price"</th>
                    <th>"Reservation date"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        let reschedule_id = row.id.clone();
                        let delete_id = row.id.clone();
                        view! {
                            <tr>
                                <td>{row.id}</td>
                                <td>{row.service_name}</td>
                                <td>{row.description}</td>
                                <td>{row.price}</td>
                                <td>{row.reservation_date}</td>
                                <td class="table__actions">
                                    <button
                                        class="btn btn--link"
                                        on:click=move |_| rescheduling.set(Some(reschedule_id.clone()))
                                    >
                                        "Reschedule"
                                    </button>
                                    <button
                                        class="btn btn--link btn--danger"
                                        on:click=move |_| deleting.set(Some(delete_id.clone()))
                                    >
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
