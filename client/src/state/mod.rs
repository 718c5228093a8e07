//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `query`, `gallery`) so individual
//! pages can depend on small focused models.

pub mod gallery;
pub mod query;
pub mod session;
