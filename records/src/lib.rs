//! Shared school-records model for the browser client and the admin CLI.
//!
//! This crate owns the JSON shape of the external records API (classrooms,
//! students, teachers, parents), the endpoint table, and the list logic both
//! front ends apply to a fetched collection: flattening, search, and paging.
//! It performs no I/O; each front end brings its own HTTP stack.

pub mod auth;
pub mod endpoint;
pub mod error;
pub mod model;
pub mod page;
pub mod search;

pub use error::ApiError;
pub use model::{Classroom, Entity, EntityKind, Parent, Student, Teacher};
pub use page::{DEFAULT_PAGE_SIZE, Page};
pub use search::{Needle, Searchable};
