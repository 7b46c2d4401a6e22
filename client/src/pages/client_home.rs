//! Client landing page: header plus the service catalogue.

use leptos::prelude::*;

use crate::components::client_header::ClientHeader;
use crate::components::require_session::RequireSession;
use crate::components::service_catalog::ServiceCatalog;

#[component]
pub fn ClientHomePage() -> impl IntoView {
    view! {
        <RequireSession>
            <div class="page page--client">
                <ClientHeader/>
                <main class="page__body">
                    <ServiceCatalog/>
                </main>
            </div>
        </RequireSession>
    }
}
