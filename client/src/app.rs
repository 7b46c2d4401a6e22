//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::pages::{
    client_bookings::ClientBookingsPage, client_home::ClientHomePage, login::LoginPage,
    provider_bookings::ProviderBookingsPage, provider_home::ProviderHomePage, register::RegisterPage,
};
use crate::state::notifications::Notifications;
use crate::state::session::{BrowserSessionStore, LoadOutcome, SessionStore};
use crate::util::session_repo::browser_repository;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and notification queue, restores any persisted
/// session once in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session: RwSignal<BrowserSessionStore> = RwSignal::new(SessionStore::new(browser_repository()));
    let toasts = RwSignal::new(Notifications::default());

    provide_context(session);
    provide_context(toasts);

    // Effects only run in the browser, where the sinks exist.
    Effect::new(move || {
        match session.try_update(SessionStore::load_from_persistence) {
            Some(LoadOutcome::Adopted) => log::debug!("restored persisted session"),
            Some(LoadOutcome::Incomplete { user, token }) => {
                log::debug!("no complete persisted session (user: {user}, token: {token})");
            }
            None => {}
        }
    });

    // Another tab wrote the sinks; pick up what it left behind.
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::storage, move |_| {
            session.update(|store| {
                store.load_from_persistence();
            });
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/bookings.css"/>
        <Title text="Bookings"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("signin") view=RegisterPage/>
                <Route path=StaticSegment("client") view=ClientHomePage/>
                <Route path=(StaticSegment("client"), StaticSegment("bookings")) view=ClientBookingsPage/>
                <Route path=StaticSegment("provider") view=ProviderHomePage/>
                <Route path=(StaticSegment("provider"), StaticSegment("bookings")) view=ProviderBookingsPage/>
            </Routes>
        </Router>
        <ToastStack/>
    }
}
