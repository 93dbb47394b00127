//! "Back to home" button shown under every table.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[component]
pub fn BackButton() -> impl IntoView {
    let navigate = use_navigate();
    view! {
        <div class="back">
            <button class="btn btn--primary" on:click=move |_| navigate("/", NavigateOptions::default())>
                "Zpět"
            </button>
        </div>
    }
}
