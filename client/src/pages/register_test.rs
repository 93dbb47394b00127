use super::*;
use records::auth::PASSWORD_MISMATCH_MESSAGE;

#[test]
fn mismatched_confirmation_is_rejected_before_request() {
    assert_eq!(validate_register("a@b.cz", "heslo1", "heslo2"), Err(PASSWORD_MISMATCH_MESSAGE));
}

#[test]
fn matching_confirmation_yields_credentials() {
    let creds = validate_register("a@b.cz", "heslo", "heslo").unwrap();
    assert_eq!(creds.password, "heslo");
}

#[test]
fn register_button_label_follows_busy() {
    assert_eq!(submit_label(false, "Registrovat se"), "Registrovat se");
    assert_eq!(submit_label(true, "Registrovat se"), "Loading...");
}
