//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (auth guard, fetch, table
//! state) and delegates rendering details to `components`.

pub mod classrooms;
pub mod home;
pub mod login;
pub mod parents;
pub mod register;
pub mod students;
pub mod teachers;
