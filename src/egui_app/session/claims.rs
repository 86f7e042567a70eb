//! Fail-soft access-token claims decoding
//!
//! Bearer tokens from the backend are three dot-separated base64url
//! segments; only the middle (claims) segment is ever read here. The
//! decoder must never panic or return an error: guard checks run on every
//! view transition, and a corrupted or hostile token has to degrade to "no
//! claims" rather than take the app down. Signature verification is the
//! server's job, not ours.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{Map, Value};

use crate::shared::user::UserRole;

/// Decoded claims record. Empty when the token was malformed in any way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Decode the claims segment of `token`. Malformed input (missing
    /// segments, bad base64, invalid UTF-8, non-object JSON) yields an
    /// empty record.
    pub fn decode(token: &str) -> Self {
        Self(decode_payload(token).unwrap_or_default())
    }

    /// True when decoding produced nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `sub` claim (the username).
    pub fn sub(&self) -> Option<&str> {
        self.0.get("sub").and_then(Value::as_str)
    }

    /// The `user_id` claim.
    pub fn user_id(&self) -> Option<i64> {
        self.0.get("user_id").and_then(as_integer)
    }

    /// The `role` claim, when present and recognized.
    pub fn role(&self) -> Option<UserRole> {
        self.0
            .get("role")
            .and_then(Value::as_str)
            .and_then(UserRole::from_claim)
    }

    /// The `exp` claim, seconds since the epoch.
    pub fn exp(&self) -> Option<i64> {
        self.0.get("exp").and_then(as_integer)
    }
}

// Some token issuers emit numeric claims as floats.
fn as_integer(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
}

fn decode_payload(token: &str) -> Option<Map<String, Value>> {
    let segment = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .ok()?;
    let text = String::from_utf8(bytes).ok()?;
    match serde_json::from_str(&text).ok()? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forge(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{}.{}.signature", header, body)
    }

    #[test]
    fn test_decode_reads_all_claims() {
        let token = forge(r#"{"sub":"alice","user_id":7,"role":"moderator","exp":1900000000}"#);
        let claims = Claims::decode(&token);

        assert!(!claims.is_empty());
        assert_eq!(claims.sub(), Some("alice"));
        assert_eq!(claims.user_id(), Some(7));
        assert_eq!(claims.role(), Some(UserRole::Moderator));
        assert_eq!(claims.exp(), Some(1900000000));
    }

    #[test]
    fn test_decode_missing_optional_claims() {
        let token = forge(r#"{"sub":"bob","exp":1900000000}"#);
        let claims = Claims::decode(&token);

        assert_eq!(claims.sub(), Some("bob"));
        assert_eq!(claims.user_id(), None);
        assert_eq!(claims.role(), None);
    }

    #[test]
    fn test_decode_float_exp() {
        let token = forge(r#"{"sub":"bob","exp":1900000000.5}"#);
        assert_eq!(Claims::decode(&token).exp(), Some(1900000000));
    }

    #[test]
    fn test_unknown_role_is_none() {
        let token = forge(r#"{"sub":"eve","role":"superuser"}"#);
        assert_eq!(Claims::decode(&token).role(), None);
    }

    #[test]
    fn test_missing_segments_yield_empty() {
        assert!(Claims::decode("").is_empty());
        assert!(Claims::decode("only-one-segment").is_empty());
    }

    #[test]
    fn test_invalid_base64_yields_empty() {
        assert!(Claims::decode("head.!!!not-base64!!!.sig").is_empty());
    }

    #[test]
    fn test_invalid_utf8_yields_empty() {
        let body = URL_SAFE_NO_PAD.encode([0xff, 0xfe, 0xfd]);
        assert!(Claims::decode(&format!("head.{}.sig", body)).is_empty());
    }

    #[test]
    fn test_non_object_json_yields_empty() {
        let body = URL_SAFE_NO_PAD.encode(b"[1,2,3]");
        assert!(Claims::decode(&format!("head.{}.sig", body)).is_empty());
    }

    #[test]
    fn test_padded_segment_still_decodes() {
        // some encoders keep the base64 padding; tolerate it
        let body = base64::engine::general_purpose::URL_SAFE.encode(br#"{"sub":"pad"}"#);
        let token = format!("head.{}.sig", body);
        assert_eq!(Claims::decode(&token).sub(), Some("pad"));
    }
}
