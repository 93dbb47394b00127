//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is app-wide and provided via context; each table page owns its own
//! `TableState` signal so leaving a page drops its rows.

pub mod auth;
pub mod table;
