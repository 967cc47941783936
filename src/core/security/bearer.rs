//! Bearer credential extraction from request headers.

use axum::http::{HeaderMap, header::AUTHORIZATION};

const BEARER_SCHEME: &str = "bearer";

/// Extract the bearer token from the `Authorization` header.
///
/// Returns `None` when the header is missing, not valid UTF-8, uses another
/// scheme, or carries an empty token. The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
