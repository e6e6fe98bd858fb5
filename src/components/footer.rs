use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer no-print">
            <p>"Arms License Portal · Local Intelligence Unit"</p>
        </footer>
    }
}
