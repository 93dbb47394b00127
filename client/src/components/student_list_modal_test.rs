use super::*;

#[test]
fn escape_closes_modal() {
    assert!(is_close_key("Escape"));
}

#[test]
fn other_keys_keep_modal_open() {
    assert!(!is_close_key("Enter"));
    assert!(!is_close_key("Esc"));
}
