//! Signature Image
//!
//! Renders an uploaded signature, falling back to text when the path is
//! missing or the image fails to load.

use leptos::prelude::*;

#[component]
pub fn SignatureImage(
    src: Option<String>,
    alt: &'static str,
    fallback: &'static str,
) -> impl IntoView {
    let (broken, set_broken) = signal(false);

    match src {
        Some(url) => view! {
            <div class="signature-img">
                <Show
                    when=move || !broken.get()
                    fallback=move || view! { <span>{fallback}</span> }
                >
                    <img
                        src=url.clone()
                        alt=alt
                        class="signature-img"
                        on:error=move |_| {
                            log::warn!("signature image failed to load");
                            set_broken.set(true);
                        }
                    />
                </Show>
            </div>
        }
        .into_any(),
        None => view! { <span>{fallback}</span> }.into_any(),
    }
}
