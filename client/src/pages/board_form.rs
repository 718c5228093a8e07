//! Pieces shared by the board write and detail pages.
//!
//! DESIGN
//! ======
//! The picked file is read from the input element at submit time and never
//! stored in a signal; only its name and size take part in validation.

#[cfg(test)]
#[path = "board_form_test.rs"]
mod board_form_test;

use leptos::prelude::*;

use crate::forms::{AttachedFile, BoardForm, Field, FieldErrors};
use crate::net::api::{BoardUpload, MutationResult};

pub(crate) const CREATED: &str = "게시글이 등록되었습니다.";
pub(crate) const CREATE_FAILED: &str = "게시글이 등록이 실패했습니다.";
pub(crate) const UPDATED: &str = "게시글이 수정되었습니다.";
pub(crate) const UPDATE_FAILED: &str = "게시글이 수정이 실패했습니다.";
pub(crate) const DELETED: &str = "게시글이 삭제되었습니다.";
pub(crate) const DELETE_FAILED: &str = "게시글 삭제가 실패했습니다.";
pub(crate) const FILE_DELETED: &str = "파일이 삭제되었습니다.";
pub(crate) const FILE_DELETE_FAILED: &str = "파일삭제가 실패했습니다.";

pub(crate) const CONFIRM_REPLACE_FILE: &str = "파일을 등록하면 기존파일이 삭제됩니다. 진행합니까?";
pub(crate) const CONFIRM_DELETE_FILE: &str = "파일이 실제로 삭제됩니다. 진행하겠습니까?";
pub(crate) const CONFIRM_DELETE_BOARD: &str = "정말 삭제하시겠습니까?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MutationOutcome {
    Succeeded,
    /// Show this alert; nothing changed.
    Failed(&'static str),
    /// The page unmounted before the response arrived.
    Dropped,
}

/// Classify a mutation response. `rejected` is shown when the backend
/// answered but its `resultCode` was not 200.
pub(crate) fn outcome(result: &MutationResult, rejected: &'static str) -> MutationOutcome {
    match result {
        Ok(envelope) if envelope.is_ok() => MutationOutcome::Succeeded,
        Ok(_) => MutationOutcome::Failed(rejected),
        Err(err) if err.is_cancelled() => MutationOutcome::Dropped,
        Err(err) => MutationOutcome::Failed(err.alert()),
    }
}

/// File currently selected in a board form's file input.
pub(crate) struct PickedFile {
    #[cfg(feature = "hydrate")]
    file: Option<web_sys::File>,
}

impl PickedFile {
    pub(crate) fn read(input: NodeRef<leptos::html::Input>) -> Self {
        #[cfg(feature = "hydrate")]
        {
            let file = input
                .get_untracked()
                .and_then(|el| el.files())
                .and_then(|files| files.get(0));
            Self { file }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
            Self {}
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn meta(&self) -> Option<AttachedFile> {
        #[cfg(feature = "hydrate")]
        {
            self.file
                .as_ref()
                .map(|file| AttachedFile { name: file.name(), size: file.size() as u64 })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    pub(crate) fn into_upload(self, form: BoardForm) -> BoardUpload {
        BoardUpload {
            form,
            #[cfg(feature = "hydrate")]
            file: self.file,
        }
    }
}

/// Empty the file input after the user declines a replacement.
pub(crate) fn clear_file_input(input: NodeRef<leptos::html::Input>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = input.get_untracked() {
            el.set_value("");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
    }
}

/// Title, contents, and file inputs with their inline errors.
#[component]
pub(crate) fn BoardFields(
    title: RwSignal<String>,
    contents: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    file_input: NodeRef<leptos::html::Input>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let field_error = move |field: Field| errors.with(|e| e.get(field));

    view! {
        <div class="board">
            <div class="form-row">
                <label for="title" class="form-label">"제목"</label>
                <input
                    type="text"
                    id="title"
                    class="form-control"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                {move || field_error(Field::Title).map(|m| view! { <p class="error">{m}</p> })}
            </div>
            {children.map(|children| children())}
            <div class="form-row">
                <label for="contents" class="form-label">"내용"</label>
                <textarea
                    id="contents"
                    class="form-control text-contents"
                    prop:value=move || contents.get()
                    on:input=move |ev| contents.set(event_target_value(&ev))
                ></textarea>
                {move || field_error(Field::Contents).map(|m| view! { <p class="error">{m}</p> })}
            </div>
            <div class="form-row">
                <label for="file" class="form-label">"첨부파일"</label>
                <input type="file" id="file" class="form-control" node_ref=file_input/>
                {move || field_error(Field::File).map(|m| view! { <p class="error">{m}</p> })}
            </div>
        </div>
    }
}
