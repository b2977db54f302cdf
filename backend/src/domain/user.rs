//! User directory records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier was zero or negative.
    #[error("user id must be a positive integer, got {0}")]
    InvalidId(i32),
    /// The username was empty.
    #[error("username must not be empty")]
    EmptyUsername,
}

/// Directory-issued user identifier.
///
/// Identifiers are issued by the directory, start at 1 and are never reused
/// until the directory is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct UserId(i32);

impl UserId {
    /// Validate and wrap a raw identifier.
    ///
    /// # Examples
    /// ```
    /// use session_auth::domain::UserId;
    ///
    /// assert_eq!(UserId::new(2).map(|id| id.get()), Ok(2));
    /// assert!(UserId::new(0).is_err());
    /// ```
    pub fn new(raw: i32) -> Result<Self, UserValidationError> {
        if raw <= 0 {
            return Err(UserValidationError::InvalidId(raw));
        }
        Ok(Self(raw))
    }

    /// Raw integer value as stored by the directory.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for i32 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<i32> for UserId {
    type Error = UserValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Username used as the login lookup key.
///
/// Only emptiness is rejected; the value is matched verbatim, so surrounding
/// whitespace is significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and wrap a username.
    pub fn new(raw: impl Into<String>) -> Result<Self, UserValidationError> {
        let value: String = raw.into();
        if value.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A directory account.
///
/// Serialised as `{"id": <int>, "username": <string>}`.
///
/// # Examples
/// ```
/// use session_auth::domain::User;
///
/// let user = User::try_from_parts(2, "bob").expect("valid user");
/// let json = serde_json::to_value(&user).expect("serialise");
/// assert_eq!(json, serde_json::json!({ "id": 2, "username": "bob" }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    id: UserId,
    username: Username,
}

impl User {
    /// Build a user from validated parts.
    pub fn new(id: UserId, username: Username) -> Self {
        Self { id, username }
    }

    /// Build a user from raw storage values.
    pub fn try_from_parts(id: i32, username: impl Into<String>) -> Result<Self, UserValidationError> {
        Ok(Self::new(UserId::new(id)?, Username::new(username)?))
    }

    /// Directory-issued identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Login name.
    pub fn username(&self) -> &Username {
        &self.username
    }
}
