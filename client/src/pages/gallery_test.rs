use super::*;

#[test]
fn summary_without_search() {
    assert_eq!(summary_text(40, 16, ""), "총 40개 이미지 중 16개 표시");
}

#[test]
fn summary_mentions_search_term() {
    assert_eq!(summary_text(24, 8, "cat"), "총 24개 이미지 중 8개 표시 - \"cat\" 검색 결과");
}

#[test]
fn selected_category_is_highlighted() {
    assert_eq!(category_class(true), "btn btn-sm btn-primary");
    assert_eq!(category_class(false), "btn btn-sm btn-outline-primary");
}
