//! Page Load States
//!
//! Loading and error panels shared by the pages.

use leptos::prelude::*;

/// Progress of a page's initial fetch
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

#[component]
pub fn LoadingPanel(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="text-center p-4">
            <div class="spinner-border" role="status">
                <span class="visually-hidden">"Loading..."</span>
            </div>
            <p class="mt-2">{message}</p>
        </div>
    }
}

/// Inline error with a Retry button
#[component]
pub fn ErrorPanel(
    #[prop(into)] message: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="text-center p-4">
            <div class="alert alert-danger" role="alert">{message}</div>
            <button class="btn btn-primary" on:click=move |_| on_retry.run(())>
                "Retry"
            </button>
        </div>
    }
}
