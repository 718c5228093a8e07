//! Networking modules for the board backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pipeline` attaches credentials and dispatches requests, `api` names the
//! backend calls, `types` defines the wire schema, and `error` the failure
//! taxonomy every caller converts into an alert.

pub mod api;
pub mod cancel;
pub mod error;
pub mod pipeline;
pub mod retry;
pub mod types;
