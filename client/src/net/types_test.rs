use super::*;

#[test]
fn envelope_accepts_response_alias_for_list_payload() {
    let raw = r#"{
        "resultCode": 200,
        "response": {
            "page": 1,
            "total": 23,
            "content": [
                {"brdId": 7, "title": "hello", "writer": "kim", "readCount": 3, "createDate": "2025-01-02"}
            ]
        }
    }"#;
    let envelope: Envelope<BoardPage> = serde_json::from_str(raw).unwrap();
    let page = envelope.into_content().unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.total, 23);
    assert_eq!(page.content[0].brd_id, 7);
    assert_eq!(page.content[0].read_count, 3);
}

#[test]
fn envelope_with_failure_code_is_rejected() {
    let raw = r#"{"resultCode": 500, "content": null}"#;
    let envelope: Envelope<BoardDetail> = serde_json::from_str(raw).unwrap();
    assert!(!envelope.is_ok());
    assert_eq!(envelope.into_content(), Err(ApiError::Rejected { code: 500 }));
}

#[test]
fn envelope_without_content_is_decode_error() {
    let raw = r#"{"resultCode": 200}"#;
    let envelope: Envelope<BoardDetail> = serde_json::from_str(raw).unwrap();
    assert!(matches!(envelope.into_content(), Err(ApiError::Decode(_))));
}

#[test]
fn login_content_reads_camel_case_and_role() {
    let raw = r#"{"token": "abc", "userName": "홍길동", "role": "ROLE_ADMIN"}"#;
    let content: LoginContent = serde_json::from_str(raw).unwrap();
    assert_eq!(content.token, "abc");
    assert_eq!(content.user_name, "홍길동");
    assert_eq!(content.role, Role::Admin);
}

#[test]
fn board_detail_defaults_missing_file_list() {
    let raw = r#"{"brdId": 3, "title": "t", "contents": "c"}"#;
    let detail: BoardDetail = serde_json::from_str(raw).unwrap();
    assert!(!detail.has_files());
    assert_eq!(detail.writer, "");
}

#[test]
fn board_detail_reads_file_list() {
    let raw = r#"{
        "brdId": 3, "title": "t", "contents": "c", "writer": "lee", "readCount": 9,
        "fileList": [{"bfId": 11, "fileName": "a.png"}]
    }"#;
    let detail: BoardDetail = serde_json::from_str(raw).unwrap();
    assert!(detail.has_files());
    assert_eq!(detail.file_list[0], BoardFile { bf_id: 11, file_name: "a.png".to_owned() });
}

#[test]
fn gallery_page_reads_next_page() {
    let raw = r#"{
        "images": [{"id": "x-1", "title": "Gallery Image 1", "imageUrl": "https://img/1"}],
        "nextPage": 2,
        "hasNextPage": true,
        "totalCount": 40
    }"#;
    let page: GalleryPage = serde_json::from_str(raw).unwrap();
    assert_eq!(page.next_page, Some(2));
    assert!(page.has_next_page);
    assert_eq!(page.images[0].likes, 0);
}
