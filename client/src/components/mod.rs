//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render table chrome (search, paging, status banners) and the
//! navigation bar while pages own data fetching and state.

pub mod back_button;
pub mod delete_button;
pub mod navbar;
pub mod pagination;
pub mod parent_details;
pub mod search_bar;
pub mod student_list_modal;
pub mod table_status;
