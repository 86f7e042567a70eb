//! Test helpers shared by the integration suites
//!
//! The session core never verifies token signatures, so tests can forge
//! unsigned three-segment tokens with whatever claims a scenario needs.

#![allow(dead_code)]

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Build an unsigned token whose claims segment is `claims` serialized as
/// JSON.
pub fn forge_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("{}.{}.forged-signature", header, payload)
}

/// An `exp` comfortably in the future.
pub fn future_exp() -> i64 {
    chrono::Utc::now().timestamp() + 3600
}

/// An `exp` comfortably in the past.
pub fn past_exp() -> i64 {
    chrono::Utc::now().timestamp() - 3600
}
