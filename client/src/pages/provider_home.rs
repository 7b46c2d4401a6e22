//! Provider landing page: header, create form, and the provider's services.

use leptos::prelude::*;

use crate::components::provider_header::ProviderHeader;
use crate::components::require_session::RequireSession;
use crate::components::service_form::ServiceForm;
use crate::components::service_list::ServiceList;

#[component]
pub fn ProviderHomePage() -> impl IntoView {
    let service_count = RwSignal::new(0_usize);
    let reload = RwSignal::new(0_u32);
    let on_created = Callback::new(move |()| reload.update(|n| *n += 1));

    view! {
        <RequireSession>
            <div class="page page--provider">
                <ProviderHeader service_count/>
                <main class="page__body">
                    <h2>"New service"</h2>
                    <ServiceForm on_created/>
                    <h2>"Your services"</h2>
                    <ServiceList reload service_count/>
                </main>
            </div>
        </RequireSession>
    }
}
