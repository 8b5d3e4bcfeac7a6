use serde::{Deserialize, Serialize};

pub const BANNER: &str = "Yearbook Memory API";
pub const LOGIN_OK: &str = "Login successful";
pub const LOGIN_INVALID: &str = "Invalid code";

// -- Banner --

#[derive(Debug, Serialize, Deserialize)]
pub struct Banner {
    pub message: String,
}

impl Default for Banner {
    fn default() -> Self {
        Self { message: BANNER.to_string() }
    }
}

// -- Auth --

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub code: String,
}

/// An unknown code is a normal response with `success: false`, not an error.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub message: String,
}

impl LoginResponse {
    pub fn accepted(username: String) -> Self {
        Self {
            success: true,
            username: Some(username),
            message: LOGIN_OK.to_string(),
        }
    }

    pub fn rejected() -> Self {
        Self {
            success: false,
            username: None,
            message: LOGIN_INVALID.to_string(),
        }
    }
}

// -- Comments --

#[derive(Debug, Clone, Deserialize)]
pub struct NewComment {
    pub friend_id: i64,
    pub username: String,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_login_omits_username() {
        let json = serde_json::to_value(LoginResponse::rejected()).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "message": "Invalid code"}));
    }

    #[test]
    fn new_comment_requires_integer_friend_id() {
        let raw = r#"{"friend_id":"one","username":"a","comment":"b"}"#;
        assert!(serde_json::from_str::<NewComment>(raw).is_err());
    }
}
