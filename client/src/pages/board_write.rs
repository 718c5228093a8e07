//! New board entry form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::board_form::{BoardFields, CREATE_FAILED, CREATED, MutationOutcome, PickedFile, outcome};
use crate::forms::{BoardForm, FieldErrors, validate_board};
use crate::net::api;
use crate::net::cancel::CancelToken;
use crate::net::pipeline::ApiClient;
use crate::routing::HOME_PATH;
use crate::state::query::QueryClient;
use crate::util::dialog;

#[component]
pub fn BoardWritePage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let query = expect_context::<QueryClient>();
    let navigate = use_navigate();
    let cancel = CancelToken::scoped();

    let title = RwSignal::new(String::new());
    let contents = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let file_input = NodeRef::<leptos::html::Input>::new();
    let busy = RwSignal::new(false);

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let picked = PickedFile::read(file_input);
        let form = BoardForm { title: title.get_untracked(), contents: contents.get_untracked(), file: picked.meta() };
        let form = match validate_board(form) {
            Ok(form) => form,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::default());
        busy.set(true);

        let upload = picked.into_upload(form);
        let navigate = navigate_submit.clone();
        let cancel = cancel.clone();
        leptos::task::spawn_local(async move {
            let result = api::create_board(client, upload, &cancel).await;
            match outcome(&result, CREATE_FAILED) {
                MutationOutcome::Succeeded => {
                    query.after_board_created();
                    dialog::alert(CREATED);
                    navigate(HOME_PATH, NavigateOptions::default());
                }
                MutationOutcome::Failed(message) => {
                    dialog::alert(message);
                    busy.set(false);
                }
                MutationOutcome::Dropped => {}
            }
        });
    };

    let go_list = move |_| navigate(HOME_PATH, NavigateOptions::default());

    view! {
        <div class="container">
            <header>
                <h2>"게시글 쓰기"</h2>
            </header>
            <section class="d-contents">
                <form on:submit=on_submit>
                    <div class="sch">
                        <button type="submit" class="btn btn-outline-primary" disabled=move || busy.get()>
                            "등록"
                        </button>
                        <button type="button" class="btn btn-outline-secondary" on:click=go_list>
                            "취소"
                        </button>
                    </div>
                    <BoardFields title=title contents=contents errors=errors file_input=file_input/>
                </form>
            </section>
        </div>
    }
}
