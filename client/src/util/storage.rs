//! Browser `localStorage` access for the bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so pages never
//! touch web-sys storage glue directly. Under SSR they no-op.

#[cfg(feature = "hydrate")]
use records::endpoint::TOKEN_STORAGE_KEY;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored JWT, if any.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the JWT returned by login.
pub fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
            log::warn!("failed to persist auth token");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Forget the JWT (logout, rejected token).
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}
