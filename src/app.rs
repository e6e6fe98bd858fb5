//! LIU Dashboard App
//!
//! Root component: routes between the application list and the PS report.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{Dashboard, PsReportPage, Sidebar};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::route::Route;

#[component]
pub fn App() -> impl IntoView {
    let (route, set_route) = signal(Route::current());

    provide_context(AppContext::new(route, ApiConfig::from_env()));

    // Follow in-page navigation. The root never unmounts, so the listener
    // lives for the whole page.
    let _hashchange = window_event_listener(ev::hashchange, move |_| {
        let next = Route::current();
        log::debug!("route changed to {:?}", next);
        set_route.set(next);
    });

    view! {
        {move || match route.get() {
            Route::Dashboard => view! { <Dashboard /> }.into_any(),
            Route::PsReport(id) => view! { <PsReportPage application_id=id /> }.into_any(),
            Route::NotFound => view! { <NotFound /> }.into_any(),
        }}
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div>
            <Sidebar />
            <div class="asside">
                <div class="container py-4 text-center">
                    <p>"Page not found"</p>
                    <a class="btn btn-primary" href=Route::Dashboard.href()>"Back to dashboard"</a>
                </div>
            </div>
        </div>
    }
}
