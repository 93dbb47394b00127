use super::*;

fn numbers(n: usize) -> Vec<usize> {
    (1..=n).collect()
}

#[test]
fn total_pages_rounds_up_and_never_zero() {
    assert_eq!(total_pages(0, 10), 1);
    assert_eq!(total_pages(10, 10), 1);
    assert_eq!(total_pages(11, 10), 2);
    assert_eq!(total_pages(25, 10), 3);
}

#[test]
fn total_pages_treats_zero_page_size_as_one() {
    assert_eq!(total_pages(3, 0), 3);
}

#[test]
fn first_page_disables_prev() {
    let page = paginate(&numbers(25), 1, 10);
    assert_eq!(page.items, numbers(10));
    assert!(!page.has_prev());
    assert!(page.has_next());
}

#[test]
fn last_page_is_partial_and_disables_next() {
    let page = paginate(&numbers(25), 3, 10);
    assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
    assert_eq!(page.total_pages, 3);
    assert!(page.has_prev());
    assert!(!page.has_next());
}

#[test]
fn page_past_end_clamps_to_last() {
    let page = paginate(&numbers(12), 9, 10);
    assert_eq!(page.page, 2);
    assert_eq!(page.items, vec![11, 12]);
}

#[test]
fn page_zero_clamps_to_first() {
    let page = paginate(&numbers(12), 0, 10);
    assert_eq!(page.page, 1);
}

#[test]
fn empty_rows_give_single_empty_page() {
    let page = paginate::<usize>(&[], 1, 10);
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 1);
    assert!(!page.has_prev());
    assert!(!page.has_next());
}

#[test]
fn never_more_than_per_page_items() {
    for p in 1..=5 {
        assert!(paginate(&numbers(47), p, DEFAULT_PAGE_SIZE).items.len() <= DEFAULT_PAGE_SIZE);
    }
}

#[test]
fn clamp_page_bounds() {
    assert_eq!(clamp_page(0, 3), 1);
    assert_eq!(clamp_page(2, 3), 2);
    assert_eq!(clamp_page(4, 3), 3);
    assert_eq!(clamp_page(4, 0), 1);
}
