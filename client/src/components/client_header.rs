//! Client header: navigation, balance with top-up, and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Name and balance come from the session store, so a booking or top-up that
//! calls `refresh_user` shows up here without a reload. Top-ups are confirmed
//! by the API before the local balance moves.

#[cfg(test)]
#[path = "client_header_test.rs"]
mod client_header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::BalanceTopUp;
use crate::paths;
use crate::state::notifications::{Notifications, notify_error, notify_success};
use crate::state::session::BrowserSessionStore;

pub const INVALID_AMOUNT_MESSAGE: &str = "Enter a valid amount to add to your balance.";

/// Parse the top-up field. Only finite amounts above zero are accepted.
pub fn parse_top_up_amount(raw: &str) -> Result<f64, &'static str> {
    match raw.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(INVALID_AMOUNT_MESSAGE),
    }
}

/// Balance label shown in the header.
pub fn format_balance(balance: Option<f64>) -> String {
    balance.map_or_else(|| "Loading...".to_owned(), |b| format!("{b} KZ"))
}

#[component]
pub fn ClientHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSessionStore>>();
    let toasts = expect_context::<RwSignal<Notifications>>();
    let navigate = use_navigate();

    let show_top_up = RwSignal::new(false);
    let show_logout = RwSignal::new(false);
    let amount = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let name = move || session.with(|s| s.current_user().map(|u| u.name).unwrap_or_default());
    let balance = move || format_balance(session.with(|s| s.current_user().map(|u| u.balance)));

    let submit_top_up = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let value = match parse_top_up_amount(&amount.get_untracked()) {
            Ok(value) => value,
            Err(msg) => {
                notify_error(toasts, msg);
                return;
            }
        };
        let Some(client_id) = session.with_untracked(|s| s.current_user().map(|u| u.id)) else {
            notify_error(toasts, "Could not identify the signed-in user.");
            return;
        };

        busy.set(true);
        leptos::task::spawn_local(async move {
            let req = BalanceTopUp { client_id, amount: value };
            match crate::net::api::top_up_balance(&req).await {
                Ok(()) => {
                    session.update(|s| {
                        s.refresh_user(|user| user.balance += value);
                    });
                    notify_success(toasts, "Balance added.");
                    show_top_up.set(false);
                    amount.set(String::new());
                }
                Err(e) => {
                    log::warn!("balance top-up failed: {e}");
                    notify_error(toasts, e.user_message("Could not add balance."));
                }
            }
            busy.set(false);
        });
    });

    let confirm_logout = move |_| {
        session.update(BrowserSessionStore::logout);
        show_logout.set(false);
        navigate(paths::LOGIN, NavigateOptions::default());
    };

    view! {
        <header class="app-header app-header--client">
            <nav class="app-header__nav">
                <a href=paths::CLIENT_HOME class="app-header__link">"Services"</a>
                <a href=paths::CLIENT_BOOKINGS class="app-header__link">"Bookings"</a>
            </nav>
            <div class="app-header__balance">
                <span>"Balance: " {balance}</span>
                <button class="btn btn--icon" title="Add balance" on:click=move |_| show_top_up.set(true)>
                    "+"
                </button>
            </div>
            <div class="app-header__user">
                <span class="app-header__name">{name}</span>
                <button class="btn" on:click=move |_| show_logout.set(true)>"Sign out"</button>
            </div>
        </header>

        <Show when=move || show_top_up.get()>
            <div class="dialog-backdrop" on:click=move |_| show_top_up.set(false)>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Add Balance"</h2>
                    <label class="dialog__label">
                        "Amount"
                        <input
                            class="dialog__input"
                            type="number"
                            min="0"
                            placeholder="Enter the amount"
                            prop:value=move || amount.get()
                            on:input=move |ev| amount.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| show_top_up.set(false)>"Cancel"</button>
                        <button
                            class="btn btn--primary"
                            disabled=move || busy.get()
                            on:click=move |_| submit_top_up.run(())
                        >
                            "Add"
                        </button>
                    </div>
                </div>
            </div>
        </Show>

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
