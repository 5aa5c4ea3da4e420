use gridmodel::{PageState, DEFAULT_PAGE_SIZE};

#[test]
fn default_starts_on_first_page() {
    let pages = PageState::default();
    assert_eq!(pages.page_index(), 0);
    assert_eq!(pages.page_size(), DEFAULT_PAGE_SIZE);
}

#[test]
fn page_count_rounds_up() {
    let pages = PageState::new(10);
    assert_eq!(pages.page_count(47), 5);
    assert_eq!(pages.page_count(50), 5);
    assert_eq!(pages.page_count(51), 6);
    assert_eq!(pages.page_count(0), 0);
    assert_eq!(pages.page_count(1), 1);
}

#[test]
fn zero_page_size_clamps_to_one() {
    let pages = PageState::new(0);
    assert_eq!(pages.page_size(), 1);
    assert_eq!(pages.page_count(3), 3);
}

#[test]
fn boundaries_with_47_rows() {
    let mut pages = PageState::new(10);

    // First page: previous disabled, next enabled.
    assert!(!pages.can_previous(47));
    assert!(pages.can_next(47));

    // Walk to the last page.
    for _ in 0..4 {
        pages.next(47);
    }
    assert_eq!(pages.page_index(), 4);
    assert!(pages.can_previous(47));
    assert!(!pages.can_next(47));

    // Next on the last page stays put.
    pages.next(47);
    assert_eq!(pages.page_index(), 4);
}

#[test]
fn first_and_last_jump() {
    let mut pages = PageState::new(10);
    pages.last(47);
    assert_eq!(pages.page_index(), 4);
    pages.first();
    assert_eq!(pages.page_index(), 0);
}

#[test]
fn previous_saturates_at_zero() {
    let mut pages = PageState::new(10);
    pages.previous(47);
    assert_eq!(pages.page_index(), 0);
}

#[test]
fn clamp_after_row_count_shrinks() {
    let mut pages = PageState::new(10);
    pages.last(47);
    assert_eq!(pages.page_index(), 4);

    // Filter shrank the set to 12 rows: only pages 0 and 1 remain.
    assert_eq!(pages.clamped_index(12), 1);
    assert_eq!(pages.range(12), 10..12);
    assert!(!pages.can_next(12));
    assert!(pages.can_previous(12));
}

#[test]
fn navigation_uses_clamped_index() {
    let mut pages = PageState::new(10);
    pages.last(47);

    // With 12 rows the effective index is 1; previous goes to 0.
    pages.previous(12);
    assert_eq!(pages.page_index(), 0);
}

#[test]
fn range_slices_each_page() {
    let pages = PageState::new(10);
    assert_eq!(pages.range(47), 0..10);

    let mut pages = PageState::new(10);
    pages.last(47);
    assert_eq!(pages.range(47), 40..47);
}

#[test]
fn empty_row_set() {
    let pages = PageState::new(10);
    assert_eq!(pages.page_count(0), 0);
    assert_eq!(pages.clamped_index(0), 0);
    assert_eq!(pages.range(0), 0..0);
    assert!(!pages.can_previous(0));
    assert!(!pages.can_next(0));
}
