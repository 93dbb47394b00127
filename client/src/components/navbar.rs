//! Top navigation bar with brand link and login/logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        crate::util::auth::logout(auth);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">"Školní evidence"</a>
            <span class="navbar__spacer"></span>
            <Show
                when=move || auth.get().is_authenticated()
                fallback=|| view! { <a href="/login" class="btn btn--primary">"Přihlásit"</a> }
            >
                <button class="btn btn--danger" on:click=on_logout.clone()>
                    "Odhlásit"
                </button>
            </Show>
        </nav>
    }
}
