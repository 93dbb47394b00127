//! Fetch and delete plumbing shared by the four record tables.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own a `RwSignal<TableState<T>>`; these helpers drive it from the
//! REST layer. At most one fetch is issued per mount. A rejected token logs
//! the user out, which in turn fires the page's login redirect.

use leptos::prelude::*;
use records::Entity;

use crate::state::auth::AuthState;
use crate::state::table::TableState;

#[cfg(feature = "hydrate")]
const NOTICE_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// Fetch the collection once a token is available.
///
/// `failure` is the page's static load-error message.
pub fn install_table_loader<T>(auth: RwSignal<AuthState>, table: RwSignal<TableState<T>>, failure: &'static str)
where
    T: Entity + Send + Sync + 'static,
{
    Effect::new(move || {
        let Some(token) = auth.get().token else {
            return;
        };
        if table.with_untracked(|t| t.requested) {
            return;
        }
        table.update(TableState::begin_load);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_all::<T>(Some(&token)).await;
            if let Err(err) = &result {
                log::error!("failed to fetch {} list: {err}", T::KIND.label());
                if err.is_unauthorized() {
                    crate::util::auth::logout(auth);
                }
            }
            table.update(|t| t.finish_load(result, failure));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, failure);
    });
}

/// Issue a delete and reconcile the table with the outcome.
pub fn delete_row<T>(auth: RwSignal<AuthState>, table: RwSignal<TableState<T>>, id: i64)
where
    T: Entity + Send + Sync + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let token = auth.get_untracked().token;
        leptos::task::spawn_local(async move {
            match crate::net::api::delete::<T>(token.as_deref(), id).await {
                Ok(()) => {
                    log::info!("deleted {} {id}", T::KIND.label());
                    table.update(|t| t.remove(id));
                }
                Err(err) => {
                    log::error!("failed to delete {} {id}: {err}", T::KIND.label());
                    if err.is_unauthorized() {
                        crate::util::auth::logout(auth);
                    }
                    let Some(generation) = table.try_update(TableState::delete_failed) else {
                        return;
                    };
                    gloo_timers::future::sleep(NOTICE_TIMEOUT).await;
                    table.try_update(|t| t.expire_notice(generation));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, table, id);
    }
}
