//! Token validity check
//!
//! The single authority for "does this token still grant access". Pure:
//! decodes claims and compares `exp` against the wall clock, nothing else.
//! Used at startup to decide whether persisted state can be trusted, and by
//! `is_logged_in` / the access guard on demand. There is deliberately no
//! skew tolerance and no background re-check.

use chrono::Utc;

use super::claims::Claims;

/// True when `token` is present and its `exp` claim lies in the future.
pub fn is_token_valid(token: Option<&str>) -> bool {
    is_token_valid_at(token, Utc::now().timestamp())
}

/// Clock-injected variant of [`is_token_valid`]. An absent token or an
/// absent/unreadable `exp` claim is invalid; expiry is strict (`now < exp`,
/// a token expiring exactly now is already invalid).
pub fn is_token_valid_at(token: Option<&str>, now_secs: i64) -> bool {
    let Some(token) = token else {
        return false;
    };
    match Claims::decode(token).exp() {
        Some(exp) => now_secs < exp,
        None => false,
    }
}
