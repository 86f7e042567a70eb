//! User and authentication wire types
//!
//! These mirror the JSON shapes the forum backend produces and consumes on
//! its authentication endpoints.

use serde::{Deserialize, Serialize};

/// Role granted to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Ordinary account
    #[default]
    Regular,
    /// Can flag posts as misleading
    Moderator,
}

impl UserRole {
    /// Parse a role from its wire form, e.g. a token claim value.
    pub fn from_claim(value: &str) -> Option<Self> {
        match value {
            "regular" => Some(Self::Regular),
            "moderator" => Some(Self::Moderator),
            _ => None,
        }
    }
}

/// A forum user as reported by the backend (or derived from token claims)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: UserRole,
    pub is_active: bool,
}

/// Payload for `POST /register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

/// Response from `POST /token`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_form() {
        assert_eq!(
            serde_json::to_string(&UserRole::Regular).unwrap(),
            "\"regular\""
        );
        assert_eq!(
            serde_json::to_string(&UserRole::Moderator).unwrap(),
            "\"moderator\""
        );
    }

    #[test]
    fn test_role_from_claim() {
        assert_eq!(UserRole::from_claim("moderator"), Some(UserRole::Moderator));
        assert_eq!(UserRole::from_claim("regular"), Some(UserRole::Regular));
        assert_eq!(UserRole::from_claim("admin"), None);
    }

    #[test]
    fn test_role_default_is_regular() {
        assert_eq!(UserRole::default(), UserRole::Regular);
    }

    #[test]
    fn test_user_round_trip() {
        let user = User {
            id: 7,
            username: "alice".to_string(),
            role: UserRole::Moderator,
            is_active: true,
        };

        let json = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, deserialized);
    }

    #[test]
    fn test_user_deserializes_backend_shape() {
        let json = r#"{"id": 3, "username": "bob", "role": "regular", "is_active": false}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.role, UserRole::Regular);
        assert!(!user.is_active);
    }

    #[test]
    fn test_user_create_omits_absent_role() {
        let req = UserCreate {
            username: "carol".to_string(),
            password: "pw".to_string(),
            role: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("role"));

        let req = UserCreate {
            role: Some(UserRole::Moderator),
            ..req
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"role\":\"moderator\""));
    }

    #[test]
    fn test_token_response() {
        let json = r#"{"access_token": "abc.def.ghi", "token_type": "bearer"}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "abc.def.ghi");
        assert_eq!(token.token_type, "bearer");
    }
}
