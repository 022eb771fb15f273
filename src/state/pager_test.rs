use super::*;

fn pager(page: i64, size: i64, total_pages: i64) -> Pager {
    Pager {
        page,
        size,
        total_pages,
    }
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn default_starts_at_first_page() {
    let p = Pager::default();
    assert_eq!(p.page, 0);
    assert_eq!(p.size, 10);
    assert!(!p.can_prev());
    assert!(!p.can_next());
}

#[test]
fn prev_disabled_on_first_page() {
    let mut p = pager(0, 10, 3);
    assert!(!p.can_prev());
    p.prev();
    assert_eq!(p.page, 0);
}

#[test]
fn next_disabled_on_last_page() {
    let mut p = pager(2, 10, 3);
    assert!(!p.can_next());
    p.next();
    assert_eq!(p.page, 2);
}

#[test]
fn next_then_prev_round_trips() {
    let mut p = pager(0, 10, 3);
    p.next();
    assert_eq!(p.page, 1);
    p.prev();
    assert_eq!(p.page, 0);
}

// =============================================================
// Size changes
// =============================================================

#[test]
fn set_size_resets_page() {
    let mut p = pager(2, 10, 3);
    p.set_size(20);
    assert_eq!(p.size, 20);
    assert_eq!(p.page, 0);
}

#[test]
fn set_size_rejects_unknown_sizes() {
    let mut p = pager(2, 10, 3);
    p.set_size(33);
    assert_eq!(p.size, 10);
    assert_eq!(p.page, 2);
}

#[test]
fn set_size_same_value_keeps_page() {
    let mut p = pager(2, 10, 3);
    p.set_size(10);
    assert_eq!(p.page, 2);
}

// =============================================================
// Applying server page counts
// =============================================================

#[test]
fn apply_records_total_pages() {
    let mut p = Pager::default();
    p.apply(3);
    assert_eq!(p.total_pages, 3);
    assert!(p.can_next());
}

#[test]
fn apply_clamps_page_when_result_set_shrinks() {
    let mut p = pager(2, 10, 3);
    p.apply(2);
    assert_eq!(p.page, 1);
}

#[test]
fn apply_zero_pages_resets_to_first() {
    let mut p = pager(2, 10, 3);
    p.apply(0);
    assert_eq!(p.page, 0);
    assert!(!p.can_next());
}

// =============================================================
// Label
// =============================================================

#[test]
fn label_is_one_based() {
    assert_eq!(pager(1, 10, 3).label(), "Page 2 / 3");
}

#[test]
fn label_shows_at_least_one_page() {
    assert_eq!(Pager::default().label(), "Page 1 / 1");
}
