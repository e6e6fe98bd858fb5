//! PS Validation Report Page
//!
//! Printable bilingual report filed by the police station, with the LIU
//! signature upload.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, SignatureUpload};
use crate::components::{LoadState, SignatureImage, SignatureUploadInput};
use crate::context::{use_app_context, AppContext};
use crate::dialog;
use crate::error::{ApiError, ApiResult};
use crate::models::PsReport;
use crate::report::{format_report_date, NOT_AVAILABLE, REPORT_ROWS};

const CERTIFICATION: &str = "प्रमाणित किया जाता है कि मैंने आवेदक द्वारा जमा किए गए आयुध अनुज्ञप्ति दान करने के लिए आवेदन प्ररूप की विषय-वस्तुओं को चैक कर लिया है।";

#[component]
pub fn PsReportPage(application_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(LoadState::<Option<PsReport>>::Loading);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let selected = RwSignal::new_local(None::<web_sys::File>);
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        let _ = reload_trigger.get();
        set_state.set(LoadState::Loading);
        spawn_local(async move {
            let result = match ctx.client() {
                Ok(client) => client.get_ps_report(application_id).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(report) => set_state.set(LoadState::Ready(report)),
                Err(e) => {
                    log::error!("failed to load PS report {}: {}", application_id, e);
                    set_state.set(LoadState::Failed(
                        e.user_message("Failed to fetch PS report", "Error loading PS report"),
                    ));
                }
            }
        });
    });

    let on_submit = move |_: web_sys::MouseEvent| {
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        let file = selected.get_untracked();
        spawn_local(async move {
            match submit_report(ctx, application_id, file).await {
                Ok(()) => {
                    dialog::alert("Report submitted successfully!");
                    selected.set(None);
                    set_reload_trigger.update(|n| *n += 1);
                }
                Err(e @ ApiError::Rejected(_)) => {
                    log::error!("LIU signature rejected for {}: {}", application_id, e);
                    dialog::alert("Failed to upload LIU signature. Please try again.");
                }
                Err(e) => {
                    log::error!("error submitting report {}: {}", application_id, e);
                    dialog::alert("Error submitting report. Please try again.");
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        {move || match state.get() {
            LoadState::Loading => view! {
                <div class="container py-4 text-center">"Loading..."</div>
            }.into_any(),
            LoadState::Failed(message) => view! {
                <div class="container py-4 text-center text-danger">{message}</div>
            }.into_any(),
            LoadState::Ready(None) => view! {
                <div class="container py-4 text-center">"No PS report found"</div>
            }.into_any(),
            LoadState::Ready(Some(report)) => view! {
                <ReportForm
                    report=report
                    selected=selected
                    submitting=submitting
                    on_submit=on_submit
                />
            }.into_any(),
        }}
    }
}

/// Upload the chosen LIU signature, if any
async fn submit_report(
    ctx: AppContext,
    application_id: u32,
    file: Option<web_sys::File>,
) -> ApiResult<()> {
    let Some(file) = file else {
        return Ok(());
    };
    let client: ApiClient = ctx.client()?;
    let upload = SignatureUpload::read(&file).await?;
    client.upload_liu_signature(application_id, upload).await
}

#[component]
fn ReportForm<F>(
    report: PsReport,
    selected: RwSignal<Option<web_sys::File>, LocalStorage>,
    submitting: ReadSignal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(web_sys::MouseEvent) + 'static,
{
    let ctx = use_app_context();
    let text_or_na = |key: &str| report.text(key).unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let rows = REPORT_ROWS
        .iter()
        .map(|(label, key)| {
            let value = text_or_na(*key);
            view! {
                <tr>
                    <th>{*label}</th>
                    <td colspan="2"><span>{value}</span></td>
                </tr>
            }
        })
        .collect_view();

    let report_date = format_report_date(report.report_date().as_deref());
    let police_station = text_or_na("police_station_name");
    let assigned_by = text_or_na("assigned_by");
    let officer_sig = report.signature_path().map(|p| ctx.asset_url(&p));
    let acp_sig = report.acp_signature().map(|p| ctx.asset_url(&p));
    let liu_sig = report.liu_signature().map(|p| ctx.asset_url(&p));

    view! {
        <div class="container-fluid py-4">
            <div class="row">
                <div class="col-12 mb-4 text-end">
                    <button class="btn btn-verify no-print" on:click=move |_| dialog::print_page()>
                        "Print PDF"
                    </button>
                </div>
                <div class="col-12">
                    <div class="pdf-text text-center">
                        <h3 class="mb-2">"पूर्ववर्ती सत्यापन रिपोर्ट"</h3>
                        <h4>"(पुलिस विभाग द्वारा भरा जाएगा)"</h4>
                    </div>
                </div>
            </div>
            <div class="row">
                <div class="col-12">
                    <div class="table-responsive mt-table">
                        <table class="table table-bordered custom-table" aria-label="Police Validation Report">
                            <tbody>
                                <tr>
                                    <th class="tble-pdf-center" colspan="3">"VALIDATION REPORT"</th>
                                </tr>
                                {rows}
                                <tr>
                                    <td colspan="3">{CERTIFICATION}</td>
                                </tr>
                                <tr>
                                    <th>"रिपोर्ट की तारीख"</th>
                                    <td colspan="2"><span>{report_date}</span></td>
                                </tr>
                                <tr>
                                    <th>"पुलिस थाना"</th>
                                    <td colspan="2"><span>{police_station}</span></td>
                                </tr>
                                <tr>
                                    <th>"द्वारा सौंपा गया"</th>
                                    <td colspan="2"><span>{assigned_by}</span></td>
                                </tr>
                                <tr>
                                    <th>"हस्ताक्षर"</th>
                                    <td colspan="2">
                                        <SignatureImage
                                            src=officer_sig
                                            alt="Official Signature"
                                            fallback="हस्ताक्षर उपलब्ध नहीं"
                                        />
                                    </td>
                                </tr>
                                <tr>
                                    <th>"ACP हस्ताक्षर"</th>
                                    <td colspan="2">
                                        <SignatureImage
                                            src=acp_sig
                                            alt="ACP Signature"
                                            fallback="ACP हस्ताक्षर उपलब्ध नहीं"
                                        />
                                    </td>
                                </tr>
                                <tr>
                                    <th>"LIU हस्ताक्षर"</th>
                                    <td colspan="2">
                                        <SignatureUploadInput selected=selected />
                                        <div class="mt-3">
                                            <SignatureImage
                                                src=liu_sig
                                                alt="LIU हस्ताक्षर"
                                                fallback="LIU हस्ताक्षर उपलब्ध नहीं"
                                            />
                                        </div>
                                    </td>
                                </tr>
                            </tbody>
                        </table>
                        <div class="text-end no-print mt-3 me-2">
                            <button
                                class="btn btn-verify"
                                disabled=move || submitting.get()
                                on:click=on_submit
                            >
                                {move || if submitting.get() {
                                    view! {
                                        <span class="spinner-border spinner-border-sm me-2" role="status"></span>
                                        "Submitting..."
                                    }.into_any()
                                } else {
                                    view! { "Submit" }.into_any()
                                }}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
