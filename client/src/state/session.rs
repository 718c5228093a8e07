//! Authenticated-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The request pipeline reads the token from here at dispatch time, the route
//! guard derives its decision from a snapshot, and the menu renders the user
//! name and role. The store is created once in `App` and handed out through
//! Leptos context.
//!
//! INVARIANTS
//! ==========
//! `token`, `user_name` and `role` are written together: `establish` sets all
//! three, `logout` clears all three. A session without a token is empty.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::error::ApiError;
use crate::net::types::LoginContent;
use crate::util::storage;

/// `localStorage` key holding the persisted session mirror.
pub const STORAGE_KEY: &str = "auth-storage";

/// Role granted by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    User,
    Admin,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::User => "ROLE_USER",
            Self::Admin => "ROLE_ADMIN",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "ROLE_USER" => Self::User,
            "ROLE_ADMIN" => Self::Admin,
            _ => Self::Other(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

/// Client-held record of the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: Option<String>,
    pub user_name: Option<String>,
    pub role: Option<Role>,
}

impl Session {
    /// Session built from a successful login payload.
    pub fn established(content: LoginContent) -> Self {
        Self {
            token: Some(content.token),
            user_name: Some(content.user_name),
            role: Some(content.role),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Role, meaningful only while authenticated.
    pub fn role(&self) -> Option<&Role> {
        self.token.as_ref().and(self.role.as_ref())
    }

    /// `Authorization` header value for the current token.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }

    /// Drop name and role when no token is present.
    fn normalized(self) -> Self {
        if self.token.is_some() { self } else { Self::default() }
    }
}

/// Reactive session handle shared through context.
///
/// The projections are memos, so a view reading only `user_name` is not
/// notified when the role or token changes without the name changing.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    state: RwSignal<Session>,
    user_name: Memo<Option<String>>,
    role: Memo<Option<Role>>,
    authenticated: Memo<bool>,
}

impl SessionStore {
    pub fn new(initial: Session) -> Self {
        let state = RwSignal::new(initial.normalized());
        let user_name = Memo::new(move |_| state.with(|s| s.user_name.clone()));
        let role = Memo::new(move |_| state.with(|s| s.role().cloned()));
        let authenticated = Memo::new(move |_| state.with(Session::is_authenticated));
        Self { state, user_name, role, authenticated }
    }

    /// Store seeded from the persisted mirror, or empty when there is none.
    pub fn rehydrate() -> Self {
        let persisted = storage::load_json::<Session>(STORAGE_KEY).unwrap_or_default();
        Self::new(persisted)
    }

    /// Point-in-time copy; does not subscribe the caller.
    pub fn snapshot(&self) -> Session {
        self.state.get_untracked()
    }

    /// Tracked read of the whole session.
    pub fn session(&self) -> Session {
        self.state.get()
    }

    /// Replace the session with one built from `content` and persist it.
    pub fn establish(&self, content: LoginContent) -> Session {
        let session = Session::established(content);
        self.state.set(session.clone());
        storage::save_json(STORAGE_KEY, &session);
        session
    }

    /// Run a credential exchange and establish the session it yields.
    ///
    /// # Errors
    ///
    /// Returns the exchange's error unchanged; the session is left as it was.
    pub async fn login<F, Fut>(&self, exchange: F) -> Result<Session, ApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<LoginContent, ApiError>>,
    {
        let content = exchange().await?;
        leptos::logging::log!("session established for {}", content.user_name);
        Ok(self.establish(content))
    }

    /// Clear every field and drop the persisted mirror.
    pub fn logout(&self) {
        self.state.set(Session::default());
        storage::remove(STORAGE_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    pub fn get_user_role(&self) -> Option<Role> {
        self.role.get()
    }

    pub fn user_name(&self) -> Option<String> {
        self.user_name.get()
    }

    pub fn is_admin(&self) -> bool {
        self.role.with(|role| role.as_ref() == Some(&Role::Admin))
    }
}
