//! Robustness properties for the claims decoder and validity check
//!
//! The decoder runs on untrusted input during every guard check, so the
//! bar is: never panic, never error, and expiry decisions follow strictly
//! from the `exp` claim.

mod common;

use proptest::prelude::*;

use vibeforum::egui_app::session::{is_token_valid_at, Claims};

use common::forge_token;

proptest! {
    #[test]
    fn decode_never_panics(token in any::<String>()) {
        let _ = Claims::decode(&token);
    }

    #[test]
    fn decode_of_arbitrary_dotted_input_never_panics(
        head in "[A-Za-z0-9_-]{0,40}",
        body in "[A-Za-z0-9_=-]{0,80}",
        tail in "[A-Za-z0-9_-]{0,40}",
    ) {
        let token = format!("{head}.{body}.{tail}");
        let claims = Claims::decode(&token);
        // whatever came out, the accessors must hold up too
        let _ = (claims.sub(), claims.user_id(), claims.role(), claims.exp());
    }

    #[test]
    fn malformed_tokens_are_never_valid(token in "[^.]{0,60}") {
        // no dots means no claims segment, so no exp, so invalid
        prop_assert!(!is_token_valid_at(Some(&token), 0));
    }

    #[test]
    fn expiry_is_a_strict_threshold(offset in -100_000i64..100_000i64) {
        let now = 1_700_000_000i64;
        let token = forge_token(&serde_json::json!({ "sub": "p", "exp": now + offset }));
        // valid exactly when now < exp; the boundary itself is expired
        prop_assert_eq!(is_token_valid_at(Some(&token), now), offset > 0);
    }

    #[test]
    fn tokens_without_exp_are_invalid(name in "[a-z]{1,12}") {
        let token = forge_token(&serde_json::json!({ "sub": name }));
        prop_assert!(!is_token_valid_at(Some(&token), 0));
    }
}

#[test]
fn absent_token_is_invalid() {
    assert!(!is_token_valid_at(None, 0));
}
