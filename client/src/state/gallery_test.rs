use super::*;

fn page(ids: &[&str], next: Option<u32>, total: usize) -> GalleryPage {
    GalleryPage {
        images: ids
            .iter()
            .map(|id| GalleryImage {
                id: (*id).to_owned(),
                title: format!("Gallery Image {id}"),
                image_url: format!("https://img/{id}"),
                description: String::new(),
                category: "all".to_owned(),
                likes: 0,
                views: 0,
            })
            .collect(),
        next_page: next,
        has_next_page: next.is_some(),
        total_count: total,
    }
}

#[test]
fn category_label_translates_all_only() {
    assert_eq!(category_label("all"), "전체");
    assert_eq!(category_label("nature"), "nature");
}

#[test]
fn query_string_encodes_search() {
    let query = GalleryQuery { search: "blue sky".to_owned(), category: "nature".to_owned() };
    assert_eq!(query.query_string(2), "page=2&limit=8&search=blue%20sky&category=nature");
}

#[test]
fn fresh_state_is_loading_and_wants_page_one() {
    let mut state = GalleryState::default();
    assert_eq!(state.status(), GalleryStatus::Loading);
    let ticket = state.begin_fetch().unwrap();
    assert_eq!(ticket.page, 1);
    assert!(state.fetching);
    assert_eq!(state.begin_fetch(), None);
}

#[test]
fn pages_accumulate_until_last_page() {
    let mut state = GalleryState::default();
    let first = state.begin_fetch().unwrap();
    assert!(state.finish_fetch(first, Ok(page(&["1", "2"], Some(2), 4))));
    assert_eq!(state.status(), GalleryStatus::Success);
    assert!(state.should_load_more(true));
    assert!(!state.should_load_more(false));

    let second = state.begin_fetch().unwrap();
    assert_eq!(second.page, 2);
    assert!(!state.should_load_more(true));
    assert!(state.finish_fetch(second, Ok(page(&["3", "4"], None, 4))));

    assert_eq!(state.image_count(), 4);
    assert_eq!(state.total_count(), 4);
    assert!(!state.has_next_page());
    assert_eq!(state.begin_fetch(), None);
    assert_eq!(state.images().last().map(|i| i.id.as_str()), Some("4"));
}

#[test]
fn reset_drops_stale_responses() {
    let mut state = GalleryState::default();
    let stale = state.begin_fetch().unwrap();
    state.reset(GalleryQuery { search: "cat".to_owned(), category: "all".to_owned() });
    assert!(!state.finish_fetch(stale, Ok(page(&["old"], None, 1))));
    assert!(state.pages.is_empty());
    assert!(!state.fetching);
}

#[test]
fn initial_failure_is_error_status() {
    let mut state = GalleryState::default();
    let ticket = state.begin_fetch().unwrap();
    state.finish_fetch(ticket, Err("boom".to_owned()));
    assert_eq!(state.status(), GalleryStatus::Error);
    assert!(!state.should_load_more(true));
}

#[test]
fn near_bottom_uses_margin() {
    assert!(near_bottom(900.0, 1000.0, 2000.0));
    assert!(!near_bottom(800.0, 1000.0, 2000.0));
}

fn loaded(search: &str, ids: &[&str]) -> GalleryState {
    let mut state = GalleryState::default();
    state.reset(GalleryQuery { search: search.to_owned(), category: "all".to_owned() });
    let ticket = state.begin_fetch().unwrap();
    state.finish_fetch(ticket, Ok(page(ids, Some(2), 20)));
    state
}

#[test]
fn parked_result_is_restored_while_fresh() {
    let mut cache = GalleryCache::default();
    let cats = loaded("cat", &["1", "2"]);
    let query = cats.query.clone();
    cache.park(cats, 1_000.0);

    let restored = cache.take(&query, 1_000.0 + STALE_AFTER_MS - 1.0).unwrap();
    assert_eq!(restored.image_count(), 2);
    assert_eq!(restored.next_page(), Some(2));
    assert!(cache.is_empty());
}

#[test]
fn stale_parked_result_is_discarded() {
    let mut cache = GalleryCache::default();
    let cats = loaded("cat", &["1"]);
    let query = cats.query.clone();
    cache.park(cats, 0.0);

    assert!(cache.take(&query, STALE_AFTER_MS).is_none());
    assert!(cache.is_empty());
}

#[test]
fn empty_or_failed_results_are_not_parked() {
    let mut cache = GalleryCache::default();
    cache.park(GalleryState::default(), 0.0);

    let mut failed = GalleryState::default();
    let ticket = failed.begin_fetch().unwrap();
    failed.finish_fetch(ticket, Err("boom".to_owned()));
    cache.park(failed, 0.0);

    assert!(cache.is_empty());
}

#[test]
fn oldest_parked_result_is_evicted() {
    let mut cache = GalleryCache::default();
    for n in 0..=CACHED_QUERIES {
        cache.park(loaded(&format!("q{n}"), &["1"]), 0.0);
    }
    assert_eq!(cache.len(), CACHED_QUERIES);
    let first = GalleryQuery { search: "q0".to_owned(), category: "all".to_owned() };
    assert!(cache.take(&first, 0.0).is_none());
}

#[test]
fn restore_drops_responses_for_the_replaced_query() {
    let mut state = GalleryState::default();
    let in_flight = state.begin_fetch().unwrap();
    state.restore(loaded("cat", &["1", "2"]));

    assert!(!state.finish_fetch(in_flight, Ok(page(&["late"], None, 1))));
    assert_eq!(state.image_count(), 2);
    assert!(!state.fetching);
    assert_eq!(state.query.search, "cat");
}
