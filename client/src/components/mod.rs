//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page frame and shared widgets while reading the
//! session and query state from Leptos context providers.

pub mod layout;
pub mod menu_bar;
pub mod pagination;
