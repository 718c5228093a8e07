//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, submission, and
//! navigation) and delegates shared widgets to `components`.

pub mod admin;
pub mod board_detail;
pub(crate) mod board_form;
pub mod board_list;
pub mod board_write;
pub mod gallery;
pub mod login;
