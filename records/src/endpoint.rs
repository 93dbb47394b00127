//! Records API endpoint table and request header helpers.
//!
//! The paths are owned by the external API and are not uniform across
//! entity kinds; keep them verbatim.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

/// Hosted records API used when no override is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://edupage.onrender.com";

/// `localStorage` key holding the JWT.
pub const TOKEN_STORAGE_KEY: &str = "token";

pub const LOGIN_PATH: &str = "/api/login";
pub const REGISTER_PATH: &str = "/api/register";

pub const CLASSROOM_LIST_PATH: &str = "/api/classroom";
pub const STUDENT_LIST_PATH: &str = "/api/student";
pub const TEACHER_LIST_PATH: &str = "/api/teacher";
pub const PARENT_LIST_PATH: &str = "/api/parent";

#[must_use]
pub fn classroom_delete_path(id: i64) -> String {
    format!("/api/classroom/deleteClassRoom/{id}")
}

#[must_use]
pub fn student_delete_path(id: i64) -> String {
    format!("/api/deleteStudent/{id}")
}

#[must_use]
pub fn teacher_delete_path(id: i64) -> String {
    format!("/api/teacher/deleteTeacher/{id}")
}

#[must_use]
pub fn parent_delete_path(id: i64) -> String {
    format!("/api/parent/{id}")
}

/// Join a base URL and an absolute API path without doubling the slash.
#[must_use]
pub fn url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// `Authorization` header value for a stored token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
