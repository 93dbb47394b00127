//! Networking modules for the records REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls; request/response shapes come from the
//! shared `records` crate.

pub mod api;
