use pretty_assertions::assert_eq;
use registry::PageWindow;
use shared_types::{normalize_page_size, PaginationMeta};

use crate::common;

#[test]
fn second_page_of_ten_by_five() {
    let reg = common::registry();
    let records = reg.students.records();
    let mut window = PageWindow::new(5);
    window.set_page(1, records.len());

    assert_eq!(window.slice(records), &records[5..10]);
    assert_eq!(window.meta(records.len()).range_label(), "6-10 of 10");
}

#[test]
fn page_size_change_resets_to_first_page() {
    let mut window = PageWindow::new(5);
    window.set_page(1, 10);
    window.set_page_size(10);
    assert_eq!(window.page(), 0);
    assert_eq!(window.page_size(), 10);
}

#[test]
fn page_beyond_end_is_clamped() {
    let mut window = PageWindow::new(5);
    window.set_page(7, 12);
    assert_eq!(window.page(), 2);
    window.next(12);
    assert_eq!(window.page(), 2);
}

#[test]
fn meta_flags() {
    assert_eq!(
        PaginationMeta::new(0, 5, 12),
        PaginationMeta {
            page: 0,
            page_size: 5,
            total: 12,
            total_pages: 3,
            has_next: true,
            has_prev: false,
        }
    );
    assert_eq!(PaginationMeta::new(0, 5, 0).range_label(), "0 of 0");
}

#[test]
fn unknown_page_size_falls_back() {
    let options = [5, 10, 25];
    assert_eq!(normalize_page_size(25, &options, 10), 25);
    assert_eq!(normalize_page_size(7, &options, 10), 10);
}
