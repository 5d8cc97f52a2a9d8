//! Current-user session, owned by the application root and handed down explicitly.

use crate::dto::auth::{LoginResponse, UserDto};
use log::debug;

pub const SESSION_EXPIRED: &str = "Session expired. Please log in again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<UserDto>,
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Session found in storage at startup.
    Restore { user: UserDto, token: String },
    LoginStarted,
    LoginSucceeded(LoginResponse),
    LoginFailed(String),
    Logout,
    /// The API rejected the token.
    Expired,
}

impl SessionAction {
    /// Name for logs; never includes credentials.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Restore { .. } => "restore",
            Self::LoginStarted => "login_started",
            Self::LoginSucceeded(_) => "login_succeeded",
            Self::LoginFailed(_) => "login_failed",
            Self::Logout => "logout",
            Self::Expired => "expired",
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Check if the current user has administrative privileges
    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.user.as_ref().map(|u| u.is_admin).unwrap_or(false)
    }

    pub fn is_expired(&self) -> bool {
        self.error.as_deref() == Some(SESSION_EXPIRED)
    }

    pub fn apply(&self, action: SessionAction) -> Self {
        debug!("session action: {}", action.label());
        match action {
            SessionAction::Restore { user, token } => Self {
                user: Some(user),
                token: Some(token),
                loading: false,
                error: None,
            },
            SessionAction::LoginStarted => Self {
                loading: true,
                error: None,
                ..self.clone()
            },
            SessionAction::LoginSucceeded(response) => Self {
                user: Some(response.user),
                token: Some(response.token),
                loading: false,
                error: None,
            },
            SessionAction::LoginFailed(error) => Self {
                error: Some(error),
                ..Self::default()
            },
            SessionAction::Logout => Self::default(),
            SessionAction::Expired => Self {
                error: Some(SESSION_EXPIRED.to_string()),
                ..Self::default()
            },
        }
    }
}
