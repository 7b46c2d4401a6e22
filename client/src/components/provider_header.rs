//! Provider header: navigation, service count, and sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::paths;
use crate::state::session::BrowserSessionStore;
use crate::util::storage::{LocalStorage, cached_service_count};

/// `service_count` is shared with the service list, which rewrites it after
/// every fetch. The cached value seeds it on mount and after writes from other
/// tabs.
#[component]
pub fn ProviderHeader(service_count: RwSignal<usize>) -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSessionStore>>();
    let navigate = use_navigate();
    let show_logout = RwSignal::new(false);

    Effect::new(move || service_count.set(cached_service_count(&LocalStorage)));

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::storage, move |_| {
            service_count.set(cached_service_count(&LocalStorage));
        });
        on_cleanup(move || handle.remove());
    }

    let name = move || session.with(|s| s.current_user().map(|u| u.name).unwrap_or_default());

    let confirm_logout = move |_| {
        session.update(BrowserSessionStore::logout);
        show_logout.set(false);
        navigate(paths::LOGIN, NavigateOptions::default());
    };

    view! {
        <header class="app-header app-header--provider">
            <nav class="app-header__nav">
                <a href=paths::PROVIDER_HOME class="app-header__link">"Services"</a>
                <a href=paths::PROVIDER_BOOKINGS class="app-header__link">"Booking history"</a>
            </nav>
            <div class="app-header__count">
                "Services: " {move || service_count.get()}
            </div>
            <div class="app-header__user">
                <span class="app-header__name">{name}</span>
                <button class="btn" on:click=move |_| show_logout.set(true)>"Sign out"</button>
            </div>
        </header>

        <Show when=move || show_logout.get()>
            <div class="dialog-backdrop" on:click=move |_| show_logout.set(false)>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Sign out"</h2>
                    <p>"Are you sure you want to sign out?"</p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| show_logout.set(false)>"Cancel"</button>
                        <button class="btn btn--primary" on:click=confirm_logout.clone()>"Sign out"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
