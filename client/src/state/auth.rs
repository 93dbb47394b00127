//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the navbar to coordinate login redirects and
//! token-dependent rendering. The token itself lives in `localStorage`; this
//! struct mirrors it reactively.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication state tracking the bearer token and restore status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the browser has read storage (SSR and first paint).
    #[must_use]
    pub fn restoring() -> Self {
        Self { token: None, loading: true }
    }

    /// Settled state from a stored token. Blank tokens count as absent.
    #[must_use]
    pub fn from_token(token: Option<String>) -> Self {
        Self { token: token.filter(|t| !t.trim().is_empty()), loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
