//! Search input bound to a table query.

use leptos::prelude::*;

/// Text input; every keystroke reports the full query.
#[component]
pub fn SearchBar(
    #[prop(into)] placeholder: String,
    #[prop(into)] query: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                class="search-bar__input"
                type="text"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
