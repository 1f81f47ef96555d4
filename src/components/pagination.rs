//! Pagination Controls
//!
//! Previous/Next buttons over the client-side pagination window.

use leptos::prelude::*;

use crate::paging;

/// Previous/Next controls for a 1-based page over `total` entries
#[component]
pub fn Pagination(
    page: ReadSignal<usize>,
    set_page: WriteSignal<usize>,
    #[prop(into)] total: Signal<usize>,
) -> impl IntoView {
    let pages = move || paging::page_count(total.get(), paging::PAGE_SIZE);

    view! {
        <div class="pagination">
            <button
                disabled=move || !paging::has_prev(page.get())
                on:click=move |_| {
                    if paging::has_prev(page.get()) {
                        set_page.update(|p| *p -= 1);
                    }
                }
            >
                "Previous"
            </button>
            <button
                disabled=move || !paging::has_next(page.get(), pages())
                on:click=move |_| {
                    if paging::has_next(page.get(), pages()) {
                        set_page.update(|p| *p += 1);
                    }
                }
            >
                "Next"
            </button>
        </div>
    }
}
