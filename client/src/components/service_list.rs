//! Provider's own services with edit, slot update, and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every successful fetch caches the service count in local storage and pushes
//! it to the header signal. Mutations bump `reload`, which refetches.

#[cfg(test)]
#[path = "service_list_test.rs"]
mod service_list_test;

use leptos::prelude::*;

use crate::components::service_form::{parse_slots, validate_service_form};
use crate::net::error::ApiError;
use crate::net::types::{Service, ServiceUpdate, SlotsUpdate};
use crate::state::notifications::{Notifications, notify_error, notify_success};
use crate::state::session::BrowserSessionStore;
use crate::util::storage::{LocalStorage, cache_service_count};

/// Edit buffer for the dialog; the price and slots stay raw until submit.
#[derive(Clone, Debug, Default)]
struct EditDraft {
    id: String,
    company_name: String,
    name: String,
    description: String,
    price: String,
    slots: String,
}

impl From<&Service> for EditDraft {
    fn from(service: &Service) -> Self {
        Self {
            id: service.id.clone(),
            company_name: service.company_name.clone(),
            name: service.name.clone(),
            description: service.description.clone(),
            price: service.price.to_string(),
            slots: service.available_slots.to_string(),
        }
    }
}

#[component]
pub fn ServiceList(reload: RwSignal<u32>, service_count: RwSignal<usize>) -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSessionStore>>();
    let toasts = expect_context::<RwSignal<Notifications>>();

    let services = LocalResource::new(move || {
        reload.track();
        let provider_id = session.with(|s| s.current_user().map(|u| u.id));
        async move {
            let Some(provider_id) = provider_id else {
                return Ok(Vec::new());
            };
            let list = crate::net::api::fetch_provider_services(&provider_id).await?;
            cache_service_count(&LocalStorage, list.len());
            service_count.set(list.len());
            Ok::<_, ApiError>(list)
        }
    });

    let editing = RwSignal::new(None::<EditDraft>);
    let deleting = RwSignal::new(None::<Service>);
    let busy = RwSignal::new(false);

    let provider_id = move || session.with_untracked(|s| s.current_user().map(|u| u.id));

    let save_details = Callback::new(move |()| {
        let Some(draft) = editing.get_untracked() else {
            return;
        };
        let fields = match validate_service_form(&draft.company_name, &draft.name, &draft.description, &draft.price) {
            Ok(fields) => fields,
            Err(msg) => {
                notify_error(toasts, msg);
                return;
            }
        };
        let Some(provider_id) = provider_id() else {
            notify_error(toasts, "Could not identify the signed-in provider.");
            return;
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            let req = ServiceUpdate {
                service_id: draft.id,
                name: fields.name,
                description: fields.description,
                price: fields.price,
                company_name: fields.company_name,
                provider_id,
            };
            match crate::net::api::update_service(&req).await {
                Ok(()) => {
                    notify_success(toasts, "Service updated.");
                    editing.set(None);
                    reload.update(|n| *n += 1);
                }
                Err(e) => {
                    log::warn!("service update failed: {e}");
                    notify_error(toasts, e.user_message("Could not update the service."));
                }
            }
            busy.set(false);
        });
    });

    let save_slots = Callback::new(move |()| {
        let Some(draft) = editing.get_untracked() else {
            return;
        };
        let available_slots = match parse_slots(&draft.slots) {
            Ok(slots) => slots,
            Err(msg) => {
                notify_error(toasts, msg);
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            let req = SlotsUpdate { service_id: draft.id, available_slots };
            match crate::net::api::update_slots(&req).await {
                Ok(()) => {
                    notify_success(toasts, "Slots updated.");
                    editing.set(None);
                    reload.update(|n| *n += 1);
                }
                Err(e) => {
                    log::warn!("slot update failed: {e}");
                    notify_error(toasts, e.user_message("Could not update the slots."));
                }
            }
            busy.set(false);
        });
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(service) = deleting.get_untracked() else {
            return;
        };
        let Some(provider_id) = provider_id() else {
            notify_error(toasts, "Could not identify the signed-in provider.");
            return;
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_service(&service.id, &provider_id).await {
                Ok(()) => {
                    notify_success(toasts, "Service deleted.");
                    reload.update(|n| *n += 1);
                }
                Err(e) => {
                    log::warn!("service delete failed: {e}");
                    notify_error(toasts, e.user_message("Could not delete the service."));
                }
            }
            deleting.set(None);
            busy.set(false);
        });
    });

    view! {
        <section class="service-list">
            <Suspense fallback=move || view! { <p>"Loading services..."</p> }>
                {move || {
                    services
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="service-list__empty">"No services yet."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <table class="table">
                                        <thead>
                                            <tr>
                                                <th>"Company"</th>
                                                <th>"Name"</th>
                                                <th>"Description"</th>
                                                <th>"Price"</th>
                                                <th>"Available slots"</th>
                                                <th>"Actions"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|service| {
                                                    let draft = EditDraft::from(&service);
                                                    let company = service.company_name.clone();
                                                    let name = service.name.clone();
                                                    let description = service.description.clone();
                                                    let price = format!("{} KZ", service.price);
                                                    let slots = service.available_slots;
                                                    view! {
                                                        <tr>
                                                            <td>{company}</td>
                                                            <td>{name}</td>
                                                            <td>{description}</td>
                                                            <td>{price}</td>
                                                            <td>{slots}</td>
                                                            <td class="table__actions">
                                                                <button
                                                                    class="btn btn--link"
                                                                    on:click=move |_| editing.set(Some(draft.clone()))
                                                                >
                                                                    "Edit"
                                                                </button>
                                                                <button
                                                                    class="btn btn--link btn--danger"
                                                                    on:click=move |_| deleting.set(Some(service.clone()))
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
                                    .into_any()
                            }
                            Err(e) => {
                                view! {
                                    <p class="service-list__empty">{e.user_message("Could not load services.")}</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>

        <Show when=move || editing.with(Option::is_some)>
            <EditServiceDialog editing busy save_details save_slots/>
        </Show>

        <Show when=move || deleting.with(Option::is_some)>
            <div class="dialog-backdrop" on:click=move |_| deleting.set(None)>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Delete service"</h2>
                    <p>"Are you sure you want to delete this service?"</p>
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
    }
}

#[component]
fn EditServiceDialog(
    editing: RwSignal<Option<EditDraft>>,
    busy: RwSignal<bool>,
    save_details: Callback<()>,
    save_slots: Callback<()>,
) -> impl IntoView {
    let field = move |read: fn(&EditDraft) -> String| {
        move || editing.with(|d| d.as_ref().map(read).unwrap_or_default())
    };
    let write = move |apply: fn(&mut EditDraft, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            editing.update(|d| {
                if let Some(draft) = d.as_mut() {
                    apply(draft, value);
                }
            });
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| editing.set(None)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit service"</h2>
                <label class="dialog__label">
                    "Company"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=field(|d| d.company_name.clone())
                        on:input=write(|d, v| d.company_name = v)
                    />
                </label>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=field(|d| d.name.clone())
                        on:input=write(|d, v| d.name = v)
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=field(|d| d.description.clone())
                        on:input=write(|d, v| d.description = v)
                    />
                </label>
                <label class="dialog__label">
                    "Price"
                    <input
                        class="dialog__input"
                        type="number"
                        min="0"
                        prop:value=field(|d| d.price.clone())
                        on:input=write(|d, v| d.price = v)
                    />
                </label>
                <label class="dialog__label">
                    "Available slots"
                    <input
                        class="dialog__input"
                        type="number"
                        min="0"
                        step="1"
                        prop:value=field(|d| d.slots.clone())
                        on:input=write(|d, v| d.slots = v)
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| editing.set(None)>"Cancel"</button>
                    <button class="btn" disabled=move || busy.get() on:click=move |_| save_slots.run(())>
                        "Update slots"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| save_details.run(())>
                        "Save details"
                    </button>
                </div>
            </div>
        </div>
    }
}
