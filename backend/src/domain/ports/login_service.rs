//! Driving port for the login use-case.
//!
//! Inbound adapters call this port with an already validated username; the
//! implementation decides which user, if any, the session should carry.

use async_trait::async_trait;

use crate::domain::{Error, User, Username};

/// Domain use-case port for username-only login.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Resolve `username` to a directory user.
    ///
    /// Returns an [`crate::domain::ErrorCode::NotFound`] error when no user
    /// matches.
    async fn login(&self, username: &Username) -> Result<User, Error>;
}
