//! Provider booking history.

use leptos::prelude::*;

use crate::components::provider_header::ProviderHeader;
use crate::components::require_session::RequireSession;
use crate::net::error::ApiError;
use crate::state::notifications::{Notifications, notify_error};
use crate::state::session::BrowserSessionStore;
use crate::util::dates::format_date_time;

#[component]
pub fn ProviderBookingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSessionStore>>();
    let toasts = expect_context::<RwSignal<Notifications>>();
    let service_count = RwSignal::new(0_usize);

    let bookings = LocalResource::new(move || {
        let provider_id = session.with(|s| s.current_user().map(|u| u.id));
        async move {
            let Some(provider_id) = provider_id else {
                return Ok(Vec::new());
            };
            let result = crate::net::api::fetch_provider_bookings(&provider_id).await;
            if let Err(e) = &result {
                log::warn!("provider history fetch failed: {e}");
                notify_error(toasts, e.user_message("Could not load the booking history."));
            }
            result
        }
    });

    view! {
        <RequireSession>
            <div class="page page--provider">
                <ProviderHeader service_count/>
                <main class="page__body">
                    <h2>"Booking history"</h2>
                    <Suspense fallback=move || view! { <p>"Loading bookings..."</p> }>
                        {move || {
                            bookings
                                .get()
                                .map(|result: Result<_, ApiError>| {
                                    let list = result.unwrap_or_default();
                                    if list.is_empty() {
                                        return view! { <p class="page__empty">"No bookings yet."</p> }.into_any();
                                    }
                                    view! {
                                        <table class="table">
                                            <thead>
                                                <tr>
                                                    <th>"ID"</th>
                                                    <th>"Client ID"</th>
                                                    <th>"Service ID"</th>
                                                    <th>"Reservation date"</th>
                                                    <th>"Created at"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {list
                                                    .into_iter()
                                                    .map(|b| {
                                                        view! {
                                                            <tr>
                                                                <td>{b.id}</td>
                                                                <td>{b.client_id}</td>
                                                                <td>{b.service_id}</td>
                                                                <td>{format_date_time(&b.reservation_date)}</td>
                                                                <td>{format_date_time(&b.created_at)}</td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </tbody>
                                        </table>
                                    }
                                        .into_any()
                                })
                        }}
                    </Suspense>
                </main>
            </div>
        </RequireSession>
    }
}
