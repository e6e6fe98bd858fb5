//! Sidebar Navigation

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::route::Route;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let link_class = move || {
        if ctx.route.get() == Route::Dashboard { "sidebar-link active" } else { "sidebar-link" }
    };

    view! {
        <aside class="sidebar no-print">
            <div class="sidebar-brand">
                <span class="sidebar-title">"Arms License"</span>
                <span class="sidebar-subtitle">"LIU"</span>
            </div>
            <nav>
                <a class=link_class href=Route::Dashboard.href()>"Dashboard"</a>
            </nav>
        </aside>
    }
}
