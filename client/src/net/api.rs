//! REST API helpers for communicating with the records API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::NotAvailable` since the
//! bearer token only exists in browser storage.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; pages map failures onto static
//! localized messages and never panic on bad responses.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::auth::Credentials;
use records::endpoint::DEFAULT_API_BASE_URL;
use records::{ApiError, Entity};

#[cfg(feature = "hydrate")]
use gloo_net::http::{Request, RequestBuilder};

/// API base URL baked in at compile time.
pub fn api_base_url() -> &'static str {
    option_env!("SCHOOL_RECORDS_API_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    records::endpoint::url(api_base_url(), path)
}

#[cfg(any(test, feature = "hydrate"))]
fn authorization_header(token: Option<&str>) -> Option<String> {
    token.filter(|t| !t.is_empty()).map(records::endpoint::bearer)
}

#[cfg(feature = "hydrate")]
fn with_headers(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    let builder = builder.header("Content-Type", "application/json");
    match authorization_header(token) {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
fn decode_error(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

/// Exchange credentials for a JWT via `POST /api/login`.
///
/// # Errors
///
/// Returns an `ApiError` on network failure, non-2xx status, or a body
/// without `jwtToken`.
pub async fn login(credentials: &Credentials) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_headers(Request::post(&api_url(records::endpoint::LOGIN_PATH)), None)
            .json(credentials)
            .map_err(decode_error)?
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status()));
        }
        let body: records::auth::LoginResponse = resp.json().await.map_err(decode_error)?;
        Ok(body.jwt_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::NotAvailable)
    }
}

/// Create an account via `POST /api/register`.
///
/// # Errors
///
/// Returns an `ApiError` on network failure or non-2xx status.
pub async fn register(credentials: &Credentials) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_headers(Request::post(&api_url(records::endpoint::REGISTER_PATH)), None)
            .json(credentials)
            .map_err(decode_error)?
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::NotAvailable)
    }
}

/// Fetch a whole collection from its list endpoint.
///
/// # Errors
///
/// Returns an `ApiError` on network failure, non-2xx status, or a body that
/// does not decode as the entity's list shape.
pub async fn fetch_all<T: Entity>(token: Option<&str>) -> Result<Vec<T>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(T::KIND.list_path());
        let resp = with_headers(Request::get(&url), token).send().await.map_err(network_error)?;
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status()));
        }
        let body: serde_json::Value = resp.json().await.map_err(decode_error)?;
        Ok(T::decode_list(body)?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::NotAvailable)
    }
}

/// Delete one record by id.
///
/// # Errors
///
/// Returns an `ApiError` on network failure or non-2xx status.
pub async fn delete<T: Entity>(token: Option<&str>, id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&T::KIND.delete_path(id));
        let resp = with_headers(Request::delete(&url), token).send().await.map_err(network_error)?;
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::NotAvailable)
    }
}
