//! Pagination Bar

use leptos::prelude::*;

use crate::pagination::Pagination;

/// "x - y of n" summary plus Previous / page numbers / Next
#[component]
pub fn PaginationBar(
    #[prop(into)] pagination: Signal<Pagination>,
    set_page: WriteSignal<usize>,
) -> impl IntoView {
    let go_prev = move |_| {
        let p = pagination.get_untracked();
        if p.has_prev() {
            set_page.set(p.page - 1);
        }
    };
    let go_next = move |_| {
        let p = pagination.get_untracked();
        if p.has_next() {
            set_page.set(p.page + 1);
        }
    };

    view! {
        <div class="pro-add-new px-0 mb-0 pt-3">
            <p>{move || pagination.get().summary()}</p>
            <nav aria-label="Application pages">
                <ul class="pagination pagination-sm mb-0">
                    <li class=move || if pagination.get().has_prev() { "page-item" } else { "page-item disabled" }>
                        <button class="page-link" on:click=go_prev>"Previous"</button>
                    </li>
                    <For
                        each=move || 1..=pagination.get().total_pages()
                        key=|n| *n
                        children=move |n| {
                            let item_class = move || {
                                if pagination.get().page == n { "page-item active" } else { "page-item" }
                            };
                            view! {
                                <li class=item_class>
                                    <button class="page-link" on:click=move |_| set_page.set(n)>
                                        {n}
                                    </button>
                                </li>
                            }
                        }
                    />
                    <li class=move || if pagination.get().has_next() { "page-item" } else { "page-item disabled" }>
                        <button class="page-link" on:click=go_next>"Next"</button>
                    </li>
                </ul>
            </nav>
        </div>
    }
}
