//! LIU Signature File Picker

use leptos::prelude::*;
use web_sys::HtmlInputElement;

use crate::api::is_image_mime;
use crate::dialog;

/// `accept="image/*"` picker; rejects non-image files with an alert and
/// keeps the previous selection.
#[component]
pub fn SignatureUploadInput(selected: RwSignal<Option<web_sys::File>, LocalStorage>) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        match input.files().and_then(|files| files.get(0)) {
            Some(file) if is_image_mime(&file.type_()) => {
                log::debug!("selected signature {} ({})", file.name(), file.type_());
                selected.set(Some(file));
            }
            _ => dialog::alert("Please select a valid image file."),
        }
    };

    view! {
        <div class="no-print">
            <input
                type="file"
                class="form-control acp-file-input mb-2"
                accept="image/*"
                on:change=on_change
            />
            {move || selected.with(|file| file.as_ref().map(|f| view! {
                <p class="text-muted small mb-2">"Selected file: " {f.name()}</p>
            }))}
        </div>
    }
}
