//! LIU Applications Dashboard
//!
//! Lists applications with status filter, search and pagination, and links
//! each row to its report and DCRB forwarding.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{
    ApplicationsTable, ErrorPanel, Footer, LoadState, LoadingPanel, PaginationBar, Sidebar,
    StatusSearch,
};
use crate::config::ITEMS_PER_PAGE;
use crate::context::use_app_context;
use crate::pagination::Pagination;
use crate::status::{filter_applications, StatusFilter, DEFAULT_STATUS_OPTION};
use crate::store::{
    store_set_applications, store_set_validation_reports, DashboardState, DashboardStateStoreFields,
};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(DashboardState::default());
    provide_context(store);

    let (load_state, set_load_state) = signal(LoadState::<()>::Loading);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (filter_value, set_filter_value) = signal(DEFAULT_STATUS_OPTION.to_string());
    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1usize);

    // Applications, refetched on Retry
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("loading applications, trigger={}", trigger);
        set_load_state.set(LoadState::Loading);
        spawn_local(async move {
            let result = match ctx.client() {
                Ok(client) => client.list_applications().await,
                Err(e) => Err(e),
            };
            match result {
                Ok(apps) => {
                    log::info!("loaded {} applications", apps.len());
                    store_set_applications(&store, apps);
                    set_load_state.set(LoadState::Ready(()));
                }
                Err(e) => {
                    log::error!("failed to load applications: {}", e);
                    set_load_state.set(LoadState::Failed(e.user_message(
                        "Failed to fetch applications.",
                        "Network error. Please try again.",
                    )));
                }
            }
        });
    });

    // Reports only decide the Report column; failures leave it at "Submit Report"
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            let result = match ctx.client() {
                Ok(client) => client.list_validation_reports().await,
                Err(e) => Err(e),
            };
            match result {
                Ok(reports) => {
                    log::debug!("loaded {} validation reports", reports.len());
                    store_set_validation_reports(&store, reports);
                }
                Err(e) => log::warn!("failed to load validation reports: {}", e),
            }
        });
    });

    let filtered = Memo::new(move |_| {
        let filter = StatusFilter::parse(&filter_value.get());
        let term = search.get();
        store.applications().with(|apps| filter_applications(apps, filter, &term))
    });

    let pagination = Memo::new(move |_| {
        Pagination::new(filtered.with(Vec::len), ITEMS_PER_PAGE, page.get())
    });

    // Keep the page in range when rows disappear
    Effect::new(move |_| {
        let total = filtered.with(Vec::len);
        let current = page.get_untracked();
        let clamped = Pagination::clamp_page(current, total, ITEMS_PER_PAGE);
        if clamped != current {
            set_page.set(clamped);
        }
    });

    let rows = Signal::derive(move || {
        let p = pagination.get();
        filtered.with(|apps| {
            apps[p.range()]
                .iter()
                .enumerate()
                .map(|(i, app)| (p.serial(i), app.clone()))
                .collect::<Vec<_>>()
        })
    });

    let on_filter = move |value: String| {
        set_filter_value.set(value);
        set_page.set(1);
    };
    let on_search = move |value: String| {
        set_search.set(value);
        set_page.set(1);
    };
    let retry = move |_: ()| set_reload_trigger.update(|n| *n += 1);

    view! {
        <div>
            <Sidebar />
            <div class="asside">
                <div class="about-first">
                    <div class="row">
                        <div class="col-12 mb-24">
                            <div class="bg-box">
                                {move || match load_state.get() {
                                    LoadState::Loading => view! {
                                        <LoadingPanel message="Loading applications..." />
                                    }.into_any(),
                                    LoadState::Failed(message) => view! {
                                        <ErrorPanel message=message on_retry=retry />
                                    }.into_any(),
                                    LoadState::Ready(()) => view! {
                                        <div class="pro-add-new px-0">
                                            <p>
                                                "List Of LIU Applications "
                                                <span>{move || filtered.with(Vec::len)}</span>
                                            </p>
                                            <StatusSearch
                                                filter_value=filter_value
                                                on_filter=on_filter
                                                search=search
                                                on_search=on_search
                                            />
                                        </div>
                                        <ApplicationsTable rows=rows />
                                        <PaginationBar pagination=pagination set_page=set_page />
                                    }.into_any(),
                                }}
                            </div>
                        </div>
                    </div>
                </div>
                <Footer />
            </div>
        </div>
    }
}
