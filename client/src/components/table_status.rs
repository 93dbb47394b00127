//! Loading, error, and notice banners for record tables.

use leptos::prelude::*;

pub const LOADING_MESSAGE: &str = "Načítání...";

/// Non-fatal banner above a table (failed delete). Click to dismiss.
#[component]
pub fn Notice(#[prop(into)] message: Signal<Option<&'static str>>, on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="notice" role="alert" on:click=move |_| on_dismiss.run(())>
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

/// Wraps table content: spinner while loading, error text instead of the
/// table on load failure, children otherwise.
#[component]
pub fn TableStatus(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    children: ChildrenFn,
) -> impl IntoView {
    move || {
        if loading.get() {
            view! { <div class="table-status">{LOADING_MESSAGE}</div> }.into_any()
        } else if let Some(message) = error.get() {
            view! { <div class="table-status table-status--error">{message}</div> }.into_any()
        } else {
            children().into_any()
        }
    }
}
