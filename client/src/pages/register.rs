//! Registration page: email + password with confirmation.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use records::auth::validate_register;

use crate::pages::login::submit_label;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        // Mismatched passwords never reach the API.
        let credentials =
            match validate_register(&email.get_untracked(), &password.get_untracked(), &confirm.get_untracked()) {
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
                match crate::net::api::register(&credentials).await {
                    Ok(()) => {
                        busy.set(false);
                        navigate("/login", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        log::error!("registration failed: {err}");
                        error.set(Some(records::auth::REGISTER_FAILED_MESSAGE));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, &navigate);
        }
    };

    view! {
        <div class="auth-card">
            <h2 class="auth-card__title">"Registrace"</h2>
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
                <label class="auth-form__label" for="confirm-password">"Potvrzení hesla"</label>
                <input
                    id="confirm-password"
                    class="auth-form__input"
                    type="password"
                    required
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <div class="auth-form__error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || submit_label(busy.get(), "Registrovat se")}
                </button>
            </form>
            <p class="auth-card__switch">
                "Máte již účet? "
                <a href="/login">"Přihlásit se"</a>
            </p>
        </div>
    }
}
