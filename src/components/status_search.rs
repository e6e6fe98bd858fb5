//! Status Filter & Search Bar

use leptos::prelude::*;

use crate::status::STATUS_OPTIONS;

/// Status dropdown and free-text search box.
///
/// Both report changes through callbacks so the page can reset to page 1.
#[component]
pub fn StatusSearch(
    filter_value: ReadSignal<String>,
    #[prop(into)] on_filter: Callback<String>,
    search: ReadSignal<String>,
    #[prop(into)] on_search: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="status-search">
            <div>
                <select
                    name="entryType"
                    id="entryType"
                    class="form-control"
                    prop:value=move || filter_value.get()
                    on:change=move |ev| on_filter.run(event_target_value(&ev))
                >
                    {STATUS_OPTIONS.iter().map(|(value, label)| {
                        let value = *value;
                        view! {
                            <option value=value selected=move || filter_value.get() == value>
                                {*label}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>
            <div>
                <input
                    type="search"
                    class="form-control me-2"
                    placeholder="Search..."
                    prop:value=move || search.get()
                    on:input=move |ev| on_search.run(event_target_value(&ev))
                />
            </div>
        </div>
    }
}
