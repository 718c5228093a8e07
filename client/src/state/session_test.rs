use super::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::reactive::owner::Owner;

fn content(role: &str) -> LoginContent {
    LoginContent {
        token: "tok-1".to_owned(),
        user_name: "홍길동".to_owned(),
        role: Role::from(role.to_owned()),
    }
}

// =============================================================
// Session
// =============================================================

#[test]
fn default_session_is_unauthenticated() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert!(session.role().is_none());
    assert!(session.bearer().is_none());
}

#[test]
fn established_session_sets_every_field() {
    let session = Session::established(content("ROLE_USER"));
    assert_eq!(session.token.as_deref(), Some("tok-1"));
    assert_eq!(session.user_name.as_deref(), Some("홍길동"));
    assert_eq!(session.role(), Some(&Role::User));
    assert_eq!(session.bearer().as_deref(), Some("Bearer tok-1"));
}

#[test]
fn role_is_hidden_without_token() {
    let session = Session { token: None, user_name: Some("x".to_owned()), role: Some(Role::Admin) };
    assert!(session.role().is_none());
}

#[test]
fn role_round_trips_through_raw_string() {
    assert_eq!(Role::from("ROLE_ADMIN".to_owned()), Role::Admin);
    assert_eq!(Role::from("ROLE_MANAGER".to_owned()), Role::Other("ROLE_MANAGER".to_owned()));
    assert_eq!(String::from(Role::User), "ROLE_USER");
    let json = serde_json::to_string(&Session::established(content("ROLE_ADMIN"))).unwrap();
    assert!(json.contains("\"role\":\"ROLE_ADMIN\""));
    assert!(json.contains("\"userName\""));
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn store_normalizes_tokenless_initial_session() {
    Owner::new().with(|| {
        let store = SessionStore::new(Session {
            token: None,
            user_name: Some("stale".to_owned()),
            role: Some(Role::Admin),
        });
        assert_eq!(store.snapshot(), Session::default());
        assert!(store.user_name().is_none());
    });
}

#[test]
fn login_then_logout_returns_to_empty_session() {
    Owner::new().with(|| {
        let store = SessionStore::new(Session::default());
        let result = futures::executor::block_on(store.login(|| async { Ok(content("ROLE_USER")) }));
        assert!(result.is_ok());
        assert!(store.is_authenticated());
        assert_eq!(store.get_user_role(), Some(Role::User));
        assert_eq!(store.user_name().as_deref(), Some("홍길동"));

        store.logout();
        assert!(!store.is_authenticated());
        assert_eq!(store.snapshot(), Session::default());
        assert!(store.get_user_role().is_none());
    });
}

#[test]
fn failed_login_leaves_session_unchanged() {
    Owner::new().with(|| {
        let store = SessionStore::new(Session::default());
        let result = futures::executor::block_on(store.login(|| async { Err(ApiError::Authentication) }));
        assert_eq!(result, Err(ApiError::Authentication));
        assert_eq!(store.snapshot(), Session::default());
        assert!(!store.is_authenticated());
    });
}

#[test]
fn failed_login_keeps_existing_session() {
    Owner::new().with(|| {
        let store = SessionStore::new(Session::default());
        store.establish(content("ROLE_ADMIN"));
        let before = store.snapshot();
        let result = futures::executor::block_on(store.login(|| async { Err(ApiError::BadRequest) }));
        assert!(result.is_err());
        assert_eq!(store.snapshot(), before);
    });
}

#[test]
fn name_reader_ignores_role_and_token_changes() {
    Owner::new().with(|| {
        let store = SessionStore::new(Session::default());
        store.establish(content("ROLE_USER"));

        let runs = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&runs);
        let shown_name = Memo::new(move |_| {
            counted.fetch_add(1, Ordering::SeqCst);
            store.user_name()
        });
        assert_eq!(shown_name.get().as_deref(), Some("홍길동"));
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        store.establish(content("ROLE_ADMIN"));
        store.establish(LoginContent { token: "tok-2".to_owned(), ..content("ROLE_ADMIN") });
        assert_eq!(shown_name.get().as_deref(), Some("홍길동"));
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(store.get_user_role(), Some(Role::Admin));

        store.logout();
        assert_eq!(shown_name.get(), None);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    });
}

#[test]
fn is_admin_follows_role() {
    Owner::new().with(|| {
        let store = SessionStore::new(Session::default());
        assert!(!store.is_admin());
        store.establish(content("ROLE_USER"));
        assert!(!store.is_admin());
        store.establish(content("ROLE_ADMIN"));
        assert!(store.is_admin());
        store.logout();
        assert!(!store.is_admin());
    });
}

#[test]
fn rehydrate_without_browser_storage_is_empty() {
    Owner::new().with(|| {
        let store = SessionStore::rehydrate();
        assert!(!store.is_authenticated());
    });
}
