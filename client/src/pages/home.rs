//! Landing page with one tile per record table.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

pub const LOGIN_REQUIRED_MESSAGE: &str = "Pro zobrazení je třeba se přihlásit.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Tile {
    path: &'static str,
    title: &'static str,
    caption: &'static str,
}

const TILES: &[Tile] = &[
    Tile { path: "/classrooms", title: "Třídy", caption: "Evidence tříd, jejich třídních učitelů a studentů." },
    Tile { path: "/teachers", title: "Učitelé", caption: "Evidence třídních učitelů" },
    Tile { path: "/students", title: "Studenti", caption: "Evidence studentů" },
    Tile { path: "/parents", title: "Rodiče", caption: "Evidence rodičů" },
];

/// Where a tile click leads: its route when signed in, otherwise a hint.
fn tile_target(authenticated: bool, path: &'static str) -> Result<&'static str, &'static str> {
    if authenticated { Ok(path) } else { Err(LOGIN_REQUIRED_MESSAGE) }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let hint = RwSignal::new(None::<&'static str>);

    let open = move |path: &'static str| match tile_target(auth.get_untracked().is_authenticated(), path) {
        Ok(path) => navigate(path, NavigateOptions::default()),
        Err(message) => hint.set(Some(message)),
    };

    view! {
        <section class="home">
            <p class="home__intro">"Školní evidence umožňuje evidovat třídy, studenty, učitele a rodiče."</p>
            <Show when=move || hint.get().is_some()>
                <div class="notice" role="alert">{move || hint.get().unwrap_or_default()}</div>
            </Show>
            <div class="home__grid">
                {TILES
                    .iter()
                    .map(|tile| {
                        let open = open.clone();
                        let path = tile.path;
                        view! {
                            <button
                                class="home__tile"
                                class:home__tile--disabled=move || !auth.get().is_authenticated()
                                on:click=move |_| open(path)
                            >
                                <span class="home__tile-title">{tile.title}</span>
                                <span class="home__tile-caption">{tile.caption}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
