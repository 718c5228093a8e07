//! Route access table and guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Layout` runs [`decide`] on every navigation inside the protected tree, so
//! access is enforced where routes are matched rather than by hiding links.
//! The backend stays the real authority; this only keeps the UI honest.
//!
//! The attempted destination survives the trip through the login page as a
//! `next` query parameter.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

use crate::state::session::{Role, Session};

pub const LOGIN_PATH: &str = "/login";
/// Landing route after login when no destination was captured.
pub const HOME_PATH: &str = "/board";
pub const ADMIN_PATH: &str = "/admin";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Authenticated,
    Role(Role),
}

fn is_under(path: &str, prefix: &str) -> bool {
    path == prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with(['/', '?']))
}

/// Access requirement for `path`.
pub fn access_for(path: &str) -> RouteAccess {
    if is_under(path, LOGIN_PATH) {
        RouteAccess::Public
    } else if is_under(path, ADMIN_PATH) {
        RouteAccess::Role(Role::Admin)
    } else {
        RouteAccess::Authenticated
    }
}

/// Session state as the guard sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardState {
    Unauthenticated,
    AuthenticatedNoRole,
    AuthenticatedWithRole(Role),
}

impl GuardState {
    pub fn of(session: &Session) -> Self {
        match (session.is_authenticated(), session.role()) {
            (false, _) => Self::Unauthenticated,
            (true, None) => Self::AuthenticatedNoRole,
            (true, Some(role)) => Self::AuthenticatedWithRole(role.clone()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Send the user to login, remembering where they were headed.
    RedirectToLogin { next: String },
    /// Signed in, but without the role the route requires.
    Forbidden,
}

/// Decide whether `session` may enter `path` under `access`.
pub fn decide(session: &Session, access: &RouteAccess, path: &str) -> GuardDecision {
    match (access, GuardState::of(session)) {
        (RouteAccess::Public, _) => GuardDecision::Allow,
        (_, GuardState::Unauthenticated) => GuardDecision::RedirectToLogin { next: path.to_owned() },
        (RouteAccess::Authenticated, _) => GuardDecision::Allow,
        (RouteAccess::Role(required), GuardState::AuthenticatedWithRole(role)) if role == *required => {
            GuardDecision::Allow
        }
        (RouteAccess::Role(_), _) => GuardDecision::Forbidden,
    }
}

/// Destinations the login page may send the user back to.
fn is_safe_destination(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.starts_with("/\\")
        && access_for(path) != RouteAccess::Public
}

/// Login URL carrying `next` when it is worth returning to.
pub fn login_redirect(next: &str) -> String {
    if next == "/" || !is_safe_destination(next) {
        LOGIN_PATH.to_owned()
    } else {
        format!("{LOGIN_PATH}?next={}", urlencoding::encode(next))
    }
}

/// Where the guard sends a visitor it turns away. A session that ended in
/// place (logout) goes to the bare login page without `next`.
pub fn guard_redirect(next: &str, session_ended: bool) -> String {
    if session_ended { LOGIN_PATH.to_owned() } else { login_redirect(next) }
}

/// Where to go after a successful login.
pub fn post_login_target(next: Option<&str>) -> String {
    match next {
        Some(path) if is_safe_destination(path) => path.to_owned(),
        _ => HOME_PATH.to_owned(),
    }
}
