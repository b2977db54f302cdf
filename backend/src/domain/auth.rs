//! Session authentication primitives.
//!
//! Login is a username lookup only; these types capture the inbound validation
//! and the per-session state machine without any transport concerns.

use super::{UserId, Username, UserValidationError};

/// Validation failures for a login attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// The `username` field was not supplied.
    #[error("username is required")]
    MissingUsername,
    /// The `username` field was supplied but empty.
    #[error("username must not be empty")]
    EmptyUsername,
}

/// Validate the optional username carried by a login payload.
///
/// # Examples
/// ```
/// use session_auth::domain::{LoginValidationError, login_username};
///
/// assert_eq!(login_username(None), Err(LoginValidationError::MissingUsername));
/// assert_eq!(login_username(Some(String::new())), Err(LoginValidationError::EmptyUsername));
/// assert!(login_username(Some("bob".to_owned())).is_ok());
/// ```
pub fn login_username(raw: Option<String>) -> Result<Username, LoginValidationError> {
    let supplied = raw.ok_or(LoginValidationError::MissingUsername)?;
    Username::new(supplied).map_err(|err| match err {
        UserValidationError::EmptyUsername | UserValidationError::InvalidId(_) => {
            LoginValidationError::EmptyUsername
        }
    })
}

/// Authentication state of one client session.
///
/// ```text
/// Anonymous --login--> Authenticated(user_id)
/// Authenticated(user_id) --logout--> Anonymous
/// ```
///
/// A session whose user has since been removed from the directory stays
/// `Authenticated`; check-session reports it as anonymous without clearing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No `user_id` is stored.
    #[default]
    Anonymous,
    /// A `user_id` is stored; it may no longer resolve.
    Authenticated(UserId),
}

impl SessionState {
    /// Return the stored user id, if any.
    pub const fn user_id(self) -> Option<UserId> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(id) => Some(id),
        }
    }
}

impl From<Option<UserId>> for SessionState {
    fn from(value: Option<UserId>) -> Self {
        value.map_or(Self::Anonymous, Self::Authenticated)
    }
}
