use kb_api::{PageRangeEntry, PaginationError, PaginationState};

#[test]
fn new_derives_previous_and_next_flags() {
    let first = PaginationState::new(1, 3, "/search?q=a").expect("valid");
    assert!(!first.has_previous);
    assert!(first.has_next);

    let last = PaginationState::new(3, 3, "/search?q=a").expect("valid");
    assert!(last.has_previous);
    assert!(!last.has_next);
}

#[test]
fn new_rejects_out_of_range_pages() {
    assert_eq!(
        PaginationState::new(0, 3, "/s"),
        Err(PaginationError::PageOutOfRange { page: 0, total: 3 })
    );
    assert_eq!(
        PaginationState::new(4, 3, "/s"),
        Err(PaginationError::PageOutOfRange { page: 4, total: 3 })
    );
    assert_eq!(PaginationState::new(1, 0, "/s"), Err(PaginationError::NoPages));
}

#[test]
fn from_count_rounds_up_and_clamps() {
    let p = PaginationState::from_count(25, 10, 2, "/s").expect("valid");
    assert_eq!(p.total_pages, 3);
    assert_eq!(p.current_page, 2);

    let p = PaginationState::from_count(25, 10, 99, "/s").expect("valid");
    assert_eq!(p.current_page, 3);

    let p = PaginationState::from_count(25, 10, 0, "/s").expect("valid");
    assert_eq!(p.current_page, 1);
}

#[test]
fn from_count_with_no_matches_is_a_single_page() {
    let p = PaginationState::from_count(0, 10, 5, "/s").expect("valid");
    assert_eq!(p.total_pages, 1);
    assert_eq!(p.current_page, 1);
    assert!(!p.has_previous && !p.has_next);
}

#[test]
fn from_count_rejects_zero_page_size() {
    assert_eq!(
        PaginationState::from_count(10, 0, 1, "/s"),
        Err(PaginationError::ZeroPageSize)
    );
}

#[test]
fn validate_catches_hand_built_state() {
    let state = PaginationState {
        current_page: 7,
        total_pages: 5,
        base_url: "/s".into(),
        has_previous: true,
        has_next: false,
    };
    assert!(state.validate().is_err());
}

#[test]
fn entry_accessors() {
    let page = PageRangeEntry::Page { number: 2, href: "/s?page=2".into(), selected: true };
    assert_eq!(page.href(), Some("/s?page=2"));
    assert!(page.is_selected());
    assert_eq!(PageRangeEntry::Ellipsis.href(), None);
    assert!(!PageRangeEntry::Ellipsis.is_selected());
}
