//! Applications Table Component
//!
//! One page of the filtered application list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DcrbButton, DeleteConfirmButton};
use crate::context::use_app_context;
use crate::dialog;
use crate::models::Application;
use crate::report::{format_created_at, is_report_submitted};
use crate::route::{filled_pdf_href, validation_report_href, Route};
use crate::status::{badge_class, file_number};
use crate::store::{store_remove_application, use_dashboard_store, DashboardStateStoreFields};

const COLUMNS: &[&str] = &[
    "Sr No",
    "File No",
    "Name",
    "Mobile Number",
    "Service Name",
    "Category",
    "Application Date",
    "Status",
    "PS Remarks",
    "View",
    "Report",
    "Actions",
];

/// Table of `(serial number, application)` rows
#[component]
pub fn ApplicationsTable(#[prop(into)] rows: Signal<Vec<(usize, Application)>>) -> impl IntoView {
    view! {
        <div class="table-responsive table-x">
            <table class="table">
                <thead>
                    <tr>
                        {COLUMNS.iter().map(|c| view! { <th scope="col">{*c}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|(serial, app)| (*serial, app.id, app.status.clone())
                        children=move |(serial, app)| view! { <ApplicationRow serial=serial app=app /> }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ApplicationRow(serial: usize, app: Application) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let id = app.id;

    let submitted = move || store.validation_reports().with(|reports| is_report_submitted(reports, id));
    let sent = Signal::derive(move || store.sent_ids().with(|ids| ids.contains(&id)));

    let delete = move |_: ()| {
        spawn_local(async move {
            let result = match ctx.client() {
                Ok(client) => client.delete_application(id).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    log::info!("application {} deleted", id);
                    store_remove_application(&store, id);
                    dialog::alert("Application deleted successfully!");
                }
                Err(e) => {
                    log::error!("failed to delete application {}: {}", id, e);
                    dialog::alert("Failed to delete application");
                }
            }
        });
    };

    let created = app.created_at.as_deref().map(format_created_at).unwrap_or_default();
    let remarks = app
        .ps_remarks
        .clone()
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| "-".to_string());
    let badge = format!("badge {}", badge_class(app.status.as_deref()));

    view! {
        <tr>
            <th scope="row">{serial}</th>
            <td>{file_number(id)}</td>
            <td>{app.applicant_name.clone()}</td>
            <td>{app.mobile_number.clone()}</td>
            <td>{app.service.clone()}</td>
            <td>{app.category.clone()}</td>
            <td>{created}</td>
            <td>
                <span class=badge>{app.status.clone()}</span>
            </td>
            <td>{remarks}</td>
            <td>
                <a href=filled_pdf_href(id) class="btn btn-success btn-sm">"View Application"</a>
            </td>
            <td>
                {move || if submitted() {
                    view! {
                        <a href=Route::PsReport(id).href() class="btn btn-success btn-sm">"View Report"</a>
                    }.into_any()
                } else {
                    view! {
                        <a href=validation_report_href(id) class="btn btn-primary btn-sm">"Submit Report"</a>
                    }.into_any()
                }}
            </td>
            <td>
                <div class="btn-group" role="group">
                    <DcrbButton app_id=id sent=sent />
                    <DeleteConfirmButton
                        prompt="Are you sure you want to delete this application?"
                        on_confirm=delete
                    />
                </div>
            </td>
        </tr>
    }
}
