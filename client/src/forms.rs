//! Synchronous form validation for login and board submissions.
//!
//! Validation runs before any dispatch: a form that fails here never reaches
//! the request pipeline, and its messages are rendered next to the fields.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Largest accepted attachment, inclusive.
pub const MAX_FILE_BYTES: u64 = 2 * 1024 * 1024;

pub const USERNAME_REQUIRED: &str = "아이디를 입력하십시오";
pub const PASSWORD_REQUIRED: &str = "패스워드를 입력하십시오";
pub const TITLE_REQUIRED: &str = "제목을 입력하십시오";
pub const CONTENTS_REQUIRED: &str = "내용을 입력하십시오";
pub const FILE_TOO_LARGE: &str = "파일은 2MB 이하여야 합니다";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
    Title,
    Contents,
    File,
}

/// Per-field validation messages in field order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(Field, &'static str)>);

impl FieldErrors {
    pub fn push(&mut self, field: Field, message: &'static str) {
        self.0.push((field, message));
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, m)| *m)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

/// Validated login input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Validate login input.
///
/// # Errors
///
/// Returns one message per missing field.
pub fn validate_login(username: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let username = username.trim();
    let mut errors = FieldErrors::default();
    if username.is_empty() {
        errors.push(Field::Username, USERNAME_REQUIRED);
    }
    if password.is_empty() {
        errors.push(Field::Password, PASSWORD_REQUIRED);
    }
    errors.into_result(Credentials { username: username.to_owned(), password: password.to_owned() })
}

/// `application/x-www-form-urlencoded` body for the login call.
pub fn encode_login_form(credentials: &Credentials) -> String {
    format!(
        "username={}&password={}",
        urlencoding::encode(&credentials.username),
        urlencoding::encode(&credentials.password)
    )
}

/// Metadata of the file picked in a board form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachedFile {
    pub name: String,
    pub size: u64,
}

/// Raw board form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardForm {
    pub title: String,
    pub contents: String,
    pub file: Option<AttachedFile>,
}

/// Validate board input.
///
/// # Errors
///
/// Returns one message per failing field.
pub fn validate_board(form: BoardForm) -> Result<BoardForm, FieldErrors> {
    let mut errors = FieldErrors::default();
    if form.title.trim().is_empty() {
        errors.push(Field::Title, TITLE_REQUIRED);
    }
    if form.contents.trim().is_empty() {
        errors.push(Field::Contents, CONTENTS_REQUIRED);
    }
    if form.file.as_ref().is_some_and(|file| file.size > MAX_FILE_BYTES) {
        errors.push(Field::File, FILE_TOO_LARGE);
    }
    errors.into_result(form)
}

/// Uploading over an entry that already has files replaces them.
pub fn replaces_existing_file(form: &BoardForm, has_existing_files: bool) -> bool {
    has_existing_files && form.file.is_some()
}
