//! Board entry view doubling as its edit form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The entry is fetched under `QueryKey::Board(id)`; a successful update or
//! attachment delete invalidates that key, so returning to this page after
//! an edit always shows the stored title and contents.

#[cfg(test)]
#[path = "board_detail_test.rs"]
mod board_detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::board_form::{
    BoardFields, CONFIRM_DELETE_BOARD, CONFIRM_DELETE_FILE, CONFIRM_REPLACE_FILE, DELETE_FAILED, DELETED,
    FILE_DELETE_FAILED, FILE_DELETED, MutationOutcome, PickedFile, UPDATE_FAILED, UPDATED, clear_file_input,
    outcome,
};
use crate::forms::{BoardForm, FieldErrors, replaces_existing_file, validate_board};
use crate::net::api;
use crate::net::cancel::CancelToken;
use crate::net::pipeline::ApiClient;
use crate::net::types::{BoardDetail, BoardFile};
use crate::routing::HOME_PATH;
use crate::state::query::{QueryClient, QueryKey};
use crate::util::dialog;

fn parse_board_id(raw: Option<String>) -> Option<i64> {
    raw.and_then(|raw| raw.trim().parse::<i64>().ok()).filter(|id| *id > 0)
}

#[component]
pub fn BoardDetailPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let query = expect_context::<QueryClient>();
    let params = use_params_map();
    let navigate = use_navigate();
    let cancel = CancelToken::scoped();

    let brd_id = Memo::new(move |_| parse_board_id(params.read().get("brd_id")));
    query.hold(move || brd_id.get().map(QueryKey::Board));

    let fetch_cancel = cancel.clone();
    let board = LocalResource::new(move || {
        let id = brd_id.get();
        if let Some(id) = id {
            query.track(&QueryKey::Board(id));
        }
        let cancel = fetch_cancel.clone();
        async move {
            match id {
                Some(id) => api::fetch_board(client, id, &cancel).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let title = RwSignal::new(String::new());
    let contents = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let file_input = NodeRef::<leptos::html::Input>::new();
    let busy = RwSignal::new(false);

    let loaded = Memo::new(move |_| board.get().and_then(Result::ok).flatten());
    Effect::new(move || {
        if let Some(detail) = loaded.get() {
            title.set(detail.title);
            contents.set(detail.contents);
            errors.set(FieldErrors::default());
        }
    });

    let navigate_update = navigate.clone();
    let update_cancel = cancel.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(detail) = loaded.get_untracked() else {
            return;
        };
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
        if replaces_existing_file(&form, detail.has_files()) && !dialog::confirm(CONFIRM_REPLACE_FILE) {
            clear_file_input(file_input);
            return;
        }
        busy.set(true);

        let upload = picked.into_upload(form);
        let brd_id = detail.brd_id;
        let navigate = navigate_update.clone();
        let cancel = update_cancel.clone();
        leptos::task::spawn_local(async move {
            let result = api::update_board(client, brd_id, upload, &cancel).await;
            match outcome(&result, UPDATE_FAILED) {
                MutationOutcome::Succeeded => {
                    query.after_board_updated(brd_id);
                    dialog::alert(UPDATED);
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

    let file_cancel = cancel.clone();
    let on_delete_file = Callback::new(move |bf_id: i64| {
        let Some(brd_id) = brd_id.get_untracked() else {
            return;
        };
        if busy.get_untracked() || !dialog::confirm(CONFIRM_DELETE_FILE) {
            return;
        }
        busy.set(true);
        let cancel = file_cancel.clone();
        leptos::task::spawn_local(async move {
            let result = api::delete_board_file(client, bf_id, &cancel).await;
            match outcome(&result, FILE_DELETE_FAILED) {
                MutationOutcome::Succeeded => {
                    query.after_file_deleted(brd_id);
                    dialog::alert(FILE_DELETED);
                    busy.set(false);
                }
                MutationOutcome::Failed(message) => {
                    dialog::alert(message);
                    busy.set(false);
                }
                MutationOutcome::Dropped => {}
            }
        });
    });

    let navigate_delete = navigate.clone();
    let on_delete = move |_| {
        let Some(id) = brd_id.get_untracked() else {
            return;
        };
        if busy.get_untracked() || !dialog::confirm(CONFIRM_DELETE_BOARD) {
            return;
        }
        busy.set(true);
        let navigate = navigate_delete.clone();
        let cancel = cancel.clone();
        leptos::task::spawn_local(async move {
            let result = api::delete_board(client, id, &cancel).await;
            match outcome(&result, DELETE_FAILED) {
                MutationOutcome::Succeeded => {
                    query.after_board_deleted(id);
                    dialog::alert(DELETED);
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
                <h2>"게시글 보기"</h2>
            </header>
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    board
                        .get()
                        .map(|result| match result {
                            Ok(Some(detail)) => {
                                let files = detail.file_list.clone();
                                view! {
                                    <section class="d-contents">
                                        <form on:submit=on_submit.clone()>
                                            <div class="sch">
                                                <button
                                                    type="submit"
                                                    class="btn btn-outline-primary"
                                                    disabled=move || busy.get()
                                                >
                                                    "수정"
                                                </button>
                                                <button
                                                    type="button"
                                                    class="btn btn-outline-secondary"
                                                    on:click=go_list.clone()
                                                >
                                                    "목록"
                                                </button>
                                                <button
                                                    type="button"
                                                    class="btn btn-outline-danger"
                                                    disabled=move || busy.get()
                                                    on:click=on_delete.clone()
                                                >
                                                    "삭제"
                                                </button>
                                            </div>
                                            <BoardFields title=title contents=contents errors=errors file_input=file_input>
                                                <BoardMeta detail=detail/>
                                            </BoardFields>
                                            <FileList files=files on_delete=on_delete_file/>
                                        </form>
                                    </section>
                                }
                                .into_any()
                            }
                            Ok(None) => view! { <p class="error">"존재하지 않는 게시글입니다."</p> }.into_any(),
                            Err(err) => {
                                leptos::logging::warn!("board fetch failed: {err}");
                                view! { <p class="error">"게시글을 불러오지 못했습니다."</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn BoardMeta(detail: BoardDetail) -> impl IntoView {
    view! {
        <div class="form-row form-row--meta">
            <label>"글쓴이"</label>
            <p>{detail.writer}</p>
            <label>"조회 수"</label>
            <p>{detail.read_count}</p>
        </div>
    }
}

#[component]
fn FileList(files: Vec<BoardFile>, on_delete: Callback<i64>) -> impl IntoView {
    view! {
        <ul class="file-list">
            {files
                .into_iter()
                .map(|file| {
                    let bf_id = file.bf_id;
                    view! {
                        <li>
                            {file.file_name}
                            <button
                                type="button"
                                class="file-list__delete"
                                aria-label="첨부파일 삭제"
                                on:click=move |_| on_delete.run(bf_id)
                            >
                                "🗑"
                            </button>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
