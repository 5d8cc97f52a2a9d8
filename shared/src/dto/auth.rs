use serde::{Deserialize, Serialize};
use validator::Validate;

/// Back-office user as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: String,
    /// Whether the user may open the admin back office
    #[serde(default)]
    pub is_admin: bool,
}

/// Request for login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Response for successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserDto,
    /// Bearer token for subsequent API calls
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let ok = LoginRequest {
            email: "admin@example.com".into(),
            password: "correct horse".into(),
        };
        assert!(ok.validate().is_ok());

        let short = LoginRequest {
            email: "admin@example.com".into(),
            password: "short".into(),
        };
        assert!(short.validate().is_err());
    }

    #[test]
    fn test_user_defaults_to_non_admin() {
        let user: UserDto = serde_json::from_str(r#"{"id":"u1","email":"a@b.co"}"#).unwrap();
        assert!(!user.is_admin);
    }
}
