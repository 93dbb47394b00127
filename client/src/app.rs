//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::NavBar;
use crate::pages::{
    classrooms::ClassroomsPage, home::HomePage, login::LoginPage, parents::ParentsPage, register::RegisterPage,
    students::StudentsPage, teachers::TeachersPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="cs">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context and sets up client-side routing. The stored
/// token is only readable in the browser, so auth starts in the restoring
/// state and settles once hydration runs the effect below.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restoring());
    provide_context(auth);

    Effect::new(move || {
        auth.set(AuthState::from_token(crate::util::storage::load_token()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/school-records.css"/>
        <Title text="Školní evidence"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| "Stránka nenalezena.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("classrooms") view=ClassroomsPage/>
                    <Route path=StaticSegment("students") view=StudentsPage/>
                    <Route path=StaticSegment("teachers") view=TeachersPage/>
                    <Route path=StaticSegment("parents") view=ParentsPage/>
                </Routes>
            </main>
        </Router>
    }
}
