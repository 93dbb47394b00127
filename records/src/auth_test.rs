use super::*;

#[test]
fn validate_login_trims_email() {
    assert_eq!(
        validate_login("  jana@skola.cz ", "heslo"),
        Ok(Credentials { email: "jana@skola.cz".to_owned(), password: "heslo".to_owned() })
    );
}

#[test]
fn validate_login_requires_both_fields() {
    assert_eq!(validate_login("   ", "heslo"), Err(MISSING_FIELDS_MESSAGE));
    assert_eq!(validate_login("jana@skola.cz", ""), Err(MISSING_FIELDS_MESSAGE));
}

#[test]
fn validate_login_keeps_password_whitespace() {
    let creds = validate_login("a@b.cz", " pw ").unwrap();
    assert_eq!(creds.password, " pw ");
}

#[test]
fn validate_register_rejects_mismatch_first() {
    assert_eq!(validate_register("a@b.cz", "one", "two"), Err(PASSWORD_MISMATCH_MESSAGE));
    assert_eq!(validate_register("", "one", "two"), Err(PASSWORD_MISMATCH_MESSAGE));
}

#[test]
fn validate_register_accepts_matching_passwords() {
    let creds = validate_register("a@b.cz", "tajne", "tajne").unwrap();
    assert_eq!(creds.email, "a@b.cz");
}

#[test]
fn login_response_reads_jwt_token_field() {
    let body: LoginResponse = serde_json::from_str(r#"{"jwtToken":"abc"}"#).unwrap();
    assert_eq!(body.jwt_token, "abc");
}

#[test]
fn credentials_serialize_as_email_password() {
    let json = serde_json::to_value(Credentials { email: "a@b.cz".to_owned(), password: "p".to_owned() }).unwrap();
    assert_eq!(json, serde_json::json!({ "email": "a@b.cz", "password": "p" }));
}
