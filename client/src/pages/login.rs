//! Login page: credential form and session establishment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only public route. A successful login replaces the session and sends
//! the user to the destination captured by the route guard, or the board
//! list when there is none.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::forms::{Field, FieldErrors, validate_login};
use crate::net::api;
use crate::net::cancel::CancelToken;
use crate::net::error::ApiError;
use crate::net::pipeline::ApiClient;
use crate::routing::post_login_target;
use crate::state::session::SessionStore;
use crate::util::dialog;

fn input_class(invalid: bool) -> &'static str {
    if invalid { "form-control is-invalid" } else { "form-control" }
}

/// Alert text for a failed login, or `None` when the page is gone.
fn failure_alert(err: &ApiError) -> Option<&'static str> {
    if err.is_cancelled() { None } else { Some(err.login_alert()) }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let query = use_query_map();
    let cancel = CancelToken::scoped();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login(&username.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::default());
        busy.set(true);

        let next = query.with_untracked(|q| q.get("next"));
        let navigate = navigate.clone();
        let cancel = cancel.clone();
        leptos::task::spawn_local(async move {
            let result = session
                .login(|| api::login(client, &credentials, &cancel))
                .await;
            match result {
                Ok(_) => navigate(&post_login_target(next.as_deref()), NavigateOptions::default()),
                Err(err) => {
                    leptos::logging::warn!("login failed: {err}");
                    if let Some(message) = failure_alert(&err) {
                        dialog::alert(message);
                    }
                }
            }
            if !cancel.is_cancelled() {
                busy.set(false);
            }
        });
    };

    let field_error = move |field: Field| errors.with(|e| e.get(field));

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">"Login"</h1>
                <form on:submit=on_submit>
                    <div class="form-row">
                        <label for="username" class="form-label">"아이디"</label>
                        <input
                            type="text"
                            id="username"
                            class=move || input_class(field_error(Field::Username).is_some())
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        {move || field_error(Field::Username).map(|m| view! { <div class="invalid-feedback">{m}</div> })}
                    </div>
                    <div class="form-row">
                        <label for="password" class="form-label">"패스워드"</label>
                        <input
                            type="password"
                            id="password"
                            class=move || input_class(field_error(Field::Password).is_some())
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        {move || field_error(Field::Password).map(|m| view! { <div class="invalid-feedback">{m}</div> })}
                    </div>
                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                            "로그인"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
