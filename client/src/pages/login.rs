//! Login page: email + password exchanged for a JWT.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use records::auth::validate_login;

use crate::state::auth::AuthState;

/// Submit button caption for the current busy state.
pub(crate) fn submit_label(busy: bool, idle: &'static str) -> &'static str {
    if busy { "Loading..." } else { idle }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&credentials).await {
                    Ok(token) => {
                        crate::util::storage::save_token(&token);
                        auth.set(AuthState::from_token(Some(token)));
                        busy.set(false);
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        log::error!("login failed: {err}");
                        error.set(Some(records::auth::LOGIN_FAILED_MESSAGE));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, auth, &navigate);
        }
    };

    view! {
        <div class="auth-card">
            <h2 class="auth-card__title">"Přihlášení"</h2>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label" for="email">"Email"</label>
                <input
                    id="email"
                    class="auth-form__input"
                    type="email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label class="auth-form__label" for="password">"Heslo"</label>
                <input
                    id="password"
                    class="auth-form__input"
                    type="password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <div class="auth-form__error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || submit_label(busy.get(), "Přihlásit se")}
                </button>
            </form>
            <p class="auth-card__switch">
                "Nemáte účet? "
                <a href="/register">"Zaregistrujte se"</a>
            </p>
        </div>
    }
}
