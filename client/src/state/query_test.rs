use super::*;
use leptos::reactive::owner::Owner;

#[test]
fn untouched_keys_start_at_zero() {
    Owner::new().with(|| {
        let queries = QueryClient::new();
        assert_eq!(queries.track(&QueryKey::Board(1)), 0);
        assert_eq!(queries.track(&QueryKey::BoardList(0)), 0);
    });
}

#[test]
fn invalidate_bumps_only_the_given_key() {
    Owner::new().with(|| {
        let queries = QueryClient::new();
        queries.track(&QueryKey::Board(1));
        queries.track(&QueryKey::Board(2));
        queries.invalidate(&QueryKey::Board(1));
        assert_eq!(queries.track(&QueryKey::Board(1)), 1);
        assert_eq!(queries.track(&QueryKey::Board(2)), 0);
    });
}

#[test]
fn board_update_invalidates_detail_and_every_list_page() {
    Owner::new().with(|| {
        let queries = QueryClient::new();
        queries.track(&QueryKey::BoardList(0));
        queries.track(&QueryKey::BoardList(3));
        queries.track(&QueryKey::Board(7));
        queries.track(&QueryKey::Board(8));

        queries.after_board_updated(7);

        assert_eq!(queries.track(&QueryKey::Board(7)), 1);
        assert_eq!(queries.track(&QueryKey::Board(8)), 0);
        assert_eq!(queries.track(&QueryKey::BoardList(0)), 1);
        assert_eq!(queries.track(&QueryKey::BoardList(3)), 1);
    });
}

#[test]
fn file_delete_leaves_lists_alone() {
    Owner::new().with(|| {
        let queries = QueryClient::new();
        queries.track(&QueryKey::BoardList(0));
        queries.track(&QueryKey::Board(4));
        queries.after_file_deleted(4);
        assert_eq!(queries.track(&QueryKey::Board(4)), 1);
        assert_eq!(queries.track(&QueryKey::BoardList(0)), 0);
    });
}

#[test]
fn invalidating_an_untracked_key_creates_no_epoch() {
    Owner::new().with(|| {
        let queries = QueryClient::new();
        queries.after_board_deleted(9);
        assert_eq!(queries.live_keys(), 0);
        assert_eq!(queries.track(&QueryKey::Board(9)), 0);
    });
}

#[test]
fn epoch_is_dropped_with_its_last_holder() {
    Owner::new().with(|| {
        let queries = QueryClient::new();
        let key = QueryKey::Board(3);
        queries.retain(&key);
        queries.retain(&key);
        queries.invalidate(&key);

        queries.release(&key);
        assert_eq!(queries.live_keys(), 1);
        assert_eq!(queries.track(&key), 1);

        queries.release(&key);
        assert_eq!(queries.live_keys(), 0);
    });
}

#[test]
fn releasing_an_unknown_key_is_harmless() {
    Owner::new().with(|| {
        let queries = QueryClient::new();
        queries.release(&QueryKey::BoardList(2));
        assert_eq!(queries.live_keys(), 0);
    });
}

#[test]
fn visiting_list_pages_keeps_only_the_held_page() {
    Owner::new().with(|| {
        let queries = QueryClient::new();
        for page in 0..20 {
            let key = QueryKey::BoardList(page);
            queries.track(&key);
            queries.retain(&key);
            if page > 0 {
                queries.release(&QueryKey::BoardList(page - 1));
            }
        }
        assert_eq!(queries.live_keys(), 1);
    });
}
