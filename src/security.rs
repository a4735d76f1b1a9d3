use axum::http::HeaderMap;
use sha2::{Digest, Sha256};

use crate::constants::ADMIN_PASSWORD_HEADER;

/// Read the admin password header.
///
/// `HeaderMap` stores names lower-cased, so any spelling of
/// `X-Admin-Password` matches. The value is returned as raw bytes, so
/// non-ASCII passwords sent as UTF-8 compare as-is.
pub fn admin_password_header(headers: &HeaderMap) -> Option<&[u8]> {
    headers
        .get(ADMIN_PASSWORD_HEADER)
        .map(|value| value.as_bytes())
}

/// Check a supplied admin password against the configured one
///
/// Fails when either side is missing or empty. Otherwise succeeds only on
/// exact byte equality. Both values are hashed first so the comparison time
/// does not depend on how much of the secret was guessed right.
pub fn verify_admin_password(provided: Option<&[u8]>, configured: Option<&str>) -> bool {
    let (Some(provided), Some(configured)) = (provided, configured) else {
        return false;
    };
    if provided.is_empty() || configured.is_empty() {
        return false;
    }

    Sha256::digest(provided) == Sha256::digest(configured.as_bytes())
}
