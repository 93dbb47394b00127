//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every record table applies identical unauthenticated redirect behavior,
//! and both the navbar and rejected API calls share one logout path.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::util::storage;

/// Redirect once auth has settled and no token is present.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.token.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no token is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Drop the stored token and settle auth as signed out.
pub fn logout(auth: RwSignal<AuthState>) {
    storage::clear_token();
    auth.set(AuthState::from_token(None));
}
