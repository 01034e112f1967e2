//! Wire types for the authentication backend.

use serde::{Deserialize, Serialize};

/// Request body for signup and login.
#[derive(Debug, Serialize)]
pub struct CredentialsBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Request body for email verification (email + code is the canonical pair).
#[derive(Debug, Serialize)]
pub struct VerifyEmailBody<'a> {
    pub email: &'a str,
    pub verification_code: &'a str,
}

/// Authenticated user identity as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub is_verified: bool,
    /// Kept as the raw string the backend sent; formats vary between
    /// backend implementations and the client only displays it.
    pub created_at: String,
}

/// Signup acknowledgement.
///
/// Demo backends may include extra fields (user_id, an echoed verification
/// code); those are intentionally not deserialized and never displayed.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupAck {
    #[serde(default)]
    pub message: Option<String>,
}

/// Verification acknowledgement.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyAck {
    #[serde(default)]
    pub message: Option<String>,
}

/// Successful login response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: User,
}

/// Health probe response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Protected dashboard greeting.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardResponse {
    pub message: String,
    pub user: User,
}

/// Registered users listing (demo-only endpoint).
#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
    pub total: usize,
}

/// Structured error body returned on non-2xx responses.
///
/// `detail` is usually a string, but validation layers can return nested
/// structures; anything non-string is rendered as compact JSON.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Returns the human-readable detail text, if any.
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_body_shape() {
        let body = CredentialsBody {
            email: "a@b.com",
            password: "secret123",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "a@b.com", "password": "secret123"})
        );
    }

    #[test]
    fn test_verify_body_uses_verification_code_field() {
        let body = VerifyEmailBody {
            email: "a@b.com",
            verification_code: "12345",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "a@b.com", "verification_code": "12345"})
        );
    }

    #[test]
    fn test_signup_ack_ignores_echoed_code() {
        // Demo backends echo the verification code; it must not survive parsing.
        let ack: SignupAck = serde_json::from_str(
            r#"{"message":"Account created","user_id":"user_1","verification_code":"12345"}"#,
        )
        .unwrap();
        assert_eq!(ack.message.as_deref(), Some("Account created"));
    }

    #[test]
    fn test_signup_ack_without_message() {
        let ack: SignupAck = serde_json::from_str("{}").unwrap();
        assert!(ack.message.is_none());
    }

    #[test]
    fn test_login_response_parses_user() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"access_token":"tok","token_type":"bearer","user":{"id":"u1","email":"a@b.com","is_verified":true,"created_at":"2024-01-01"}}"#,
        )
        .unwrap();
        assert_eq!(resp.access_token, "tok");
        assert_eq!(resp.user.id, "u1");
        assert!(resp.user.is_verified);
    }

    #[test]
    fn test_error_body_string_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"Invalid code"}"#).unwrap();
        assert_eq!(body.detail_text().as_deref(), Some("Invalid code"));
    }

    #[test]
    fn test_error_body_structured_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":[{"loc":["body","email"]}]}"#).unwrap();
        let text = body.detail_text().unwrap();
        assert!(text.contains("email"));
    }

    #[test]
    fn test_error_body_missing_detail() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.detail_text().is_none());
    }
}
