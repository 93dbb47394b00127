//! Row-level delete action.

use leptos::prelude::*;

#[component]
pub fn DeleteButton(id: i64, on_delete: Callback<i64>) -> impl IntoView {
    view! {
        <button
            class="btn btn--danger btn--icon"
            title="Vymazat"
            aria-label="Vymazat"
            on:click=move |_| on_delete.run(id)
        >
            "✕"
        </button>
    }
}
