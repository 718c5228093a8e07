use super::*;

#[test]
fn board_list_endpoint_formats_page_query() {
    assert_eq!(board_list_endpoint(0), "/board?page=0");
    assert_eq!(board_list_endpoint(12), "/board?page=12");
}

#[test]
fn board_endpoints_format_ids() {
    assert_eq!(board_endpoint(42), "/board/42");
    assert_eq!(board_file_endpoint(9), "/board/file/9");
}

#[test]
fn gallery_endpoint_carries_paging_and_filters() {
    let query = GalleryQuery { search: String::new(), category: "city".to_owned() };
    assert_eq!(gallery_endpoint(&query, 1), "/gallery?page=1&limit=8&search=&category=city");
}

#[test]
fn create_fields_omit_board_id() {
    let form = BoardForm { title: "제목".to_owned(), contents: "본문".to_owned(), file: None };
    assert_eq!(
        board_fields(None, &form),
        vec![("title", "제목".to_owned()), ("contents", "본문".to_owned())]
    );
}

#[test]
fn update_fields_lead_with_board_id() {
    let form = BoardForm { title: "t".to_owned(), contents: "c".to_owned(), file: None };
    let fields = board_fields(Some(5), &form);
    assert_eq!(fields[0], ("brdId", "5".to_owned()));
    assert_eq!(fields.len(), 3);
}

#[test]
fn calls_are_unavailable_outside_the_browser() {
    use crate::state::session::{Session, SessionStore};
    use leptos::reactive::owner::Owner;

    Owner::new().with(|| {
        let client = ApiClient::new(SessionStore::new(Session::default()));
        let cancel = CancelToken::detached();
        let result = futures::executor::block_on(list_boards(client, 0, &cancel));
        assert_eq!(result, Err(ApiError::Unavailable));
    });
}
