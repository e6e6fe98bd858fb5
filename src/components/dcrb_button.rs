//! DCRB Forward Button

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::dialog;
use crate::store::{store_mark_sent, use_dashboard_store};

const FORWARD_FAILED: &str = "Failed to forward to DCRB. Please try again.";

/// Forwards one application to DCRB; becomes a disabled "Sent" badge after
#[component]
pub fn DcrbButton(app_id: u32, #[prop(into)] sent: Signal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let (busy, set_busy) = signal(false);

    let forward = move |_| {
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            let result = match ctx.client() {
                Ok(client) => client.forward_to_dcrb(app_id).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    log::info!("application {} forwarded to DCRB", app_id);
                    store_mark_sent(&store, app_id);
                    dialog::alert("Application forwarded to DCRB successfully!");
                }
                Err(e) => {
                    log::error!("failed to forward application {} to DCRB: {}", app_id, e);
                    dialog::alert(FORWARD_FAILED);
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        {move || if sent.get() {
            view! {
                <button class="btn btn-success btn-sm text-white" disabled>
                    <i class="fa-solid fa-check me-1"></i>
                    "Sent"
                </button>
            }.into_any()
        } else {
            view! {
                <button
                    class="btn btn-info btn-sm text-white"
                    title="Forward to DCRB"
                    disabled=move || busy.get()
                    on:click=forward
                >
                    <i class="fa-solid fa-paper-plane me-1"></i>
                    "DCRB"
                </button>
            }.into_any()
        }}
    }
}
