//! Bottom-right stack of transient notifications.

use leptos::prelude::*;

use crate::state::notifications::{Notifications, ToastLevel};

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<Notifications>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.with(|n| n.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.level {
                        ToastLevel::Success => "toast toast--success",
                        ToastLevel::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class on:click=move |_| toasts.update(|n| {
                            n.dismiss(id);
                        })>
                            {toast.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
