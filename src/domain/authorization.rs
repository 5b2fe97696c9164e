/// Authenticated caller, extracted from a verified token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserContext {
    pub username: String,
    pub is_admin: bool,
}

impl UserContext {
    pub fn new(username: impl Into<String>, is_admin: bool) -> Self {
        Self {
            username: username.into(),
            is_admin,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Check if the caller may act on the account `username`
    pub fn can_act_for(&self, username: &str) -> bool {
        self.is_admin || self.username == username
    }
}

/// Access policy of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    LoggedIn,
    Admin,
    /// The user named in the path, or an admin
    CorrectUserOrAdmin,
}

impl AccessPolicy {
    pub fn check(
        &self,
        context: Option<&UserContext>,
        path_username: Option<&str>,
    ) -> Result<(), AuthorizationError> {
        let context = context.ok_or_else(|| {
            AuthorizationError::AuthenticationRequired("No valid token supplied".to_string())
        })?;

        match self {
            AccessPolicy::LoggedIn => Ok(()),
            AccessPolicy::Admin if context.is_admin() => Ok(()),
            AccessPolicy::Admin => Err(AuthorizationError::PermissionDenied(
                "Admin rights required".to_string(),
            )),
            AccessPolicy::CorrectUserOrAdmin => match path_username {
                Some(username) if context.can_act_for(username) => Ok(()),
                _ => Err(AuthorizationError::PermissionDenied(
                    "Only the account owner or an admin may do this".to_string(),
                )),
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthorizationError {
    #[error("Authentication required: {0}")]
    AuthenticationRequired(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}
