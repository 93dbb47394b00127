//! Login/registration payloads and form validation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

pub const MISSING_FIELDS_MESSAGE: &str = "Vyplňte email i heslo.";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Hesla se neshodují.";
pub const LOGIN_FAILED_MESSAGE: &str = "Přihlášení se nezdařilo. Zkontrolujte své údaje.";
pub const REGISTER_FAILED_MESSAGE: &str = "Registrace selhala. Zkuste to prosím znovu.";

/// Body for both `POST /api/login` and `POST /api/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "jwtToken")]
    pub jwt_token: String,
}

/// Validate login input. The email is trimmed; the password is kept as typed.
///
/// # Errors
///
/// Returns a user-facing message if either field is empty.
pub fn validate_login(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Validate registration input, including the password confirmation.
///
/// # Errors
///
/// Returns a user-facing message if a field is empty or the passwords differ.
pub fn validate_register(email: &str, password: &str, confirm: &str) -> Result<Credentials, &'static str> {
    if password != confirm {
        return Err(PASSWORD_MISMATCH_MESSAGE);
    }
    validate_login(email, password)
}
