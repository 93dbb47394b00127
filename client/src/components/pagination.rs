//! Previous/next page controls.

use leptos::prelude::*;

#[must_use]
pub fn page_label(page: usize, total_pages: usize) -> String {
    format!("Stránka {page} z {total_pages}")
}

/// Prev/next buttons disabled at the bounds, with a "page X of Y" label.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="btn pagination__prev"
                disabled=move || page.get() <= 1
                on:click=move |_| on_prev.run(())
            >
                "Předchozí"
            </button>
            <span class="pagination__label">{move || page_label(page.get(), total_pages.get())}</span>
            <button
                class="btn pagination__next"
                disabled=move || page.get() >= total_pages.get()
                on:click=move |_| on_next.run(())
            >
                "Další"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_label_formats_czech() {
        assert_eq!(page_label(2, 5), "Stránka 2 z 5");
    }
}
