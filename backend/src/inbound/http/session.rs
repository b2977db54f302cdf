//! Session helpers keeping HTTP handlers free of framework-specific logic.
//!
//! Wraps the Actix session so handlers only deal with domain operations:
//! persisting, reading and clearing the authenticated user id.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, SessionState, UserId};

/// Session key holding the authenticated user id.
pub(crate) const USER_ID_KEY: &str = "user_id";

/// Newtype wrapper exposing higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store `user_id` in the session, replacing any previous value.
    pub fn persist_user(&self, user_id: UserId) -> Result<(), Error> {
        self.0
            .insert(USER_ID_KEY, user_id.get())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Current session state.
    ///
    /// A stored value that is not a valid user id is logged and treated as
    /// anonymous; it is left in place.
    pub fn state(&self) -> SessionState {
        let raw = match self.0.get::<i32>(USER_ID_KEY) {
            Ok(raw) => raw,
            Err(error) => {
                warn!(%error, "unreadable user id in session cookie");
                return SessionState::Anonymous;
            }
        };
        match raw.map(UserId::new).transpose() {
            Ok(user_id) => SessionState::from(user_id),
            Err(error) => {
                warn!(%error, "invalid user id in session cookie");
                SessionState::Anonymous
            }
        }
    }

    /// Remove the user id from the session. No-op when absent.
    pub fn clear_user(&self) {
        self.0.remove(USER_ID_KEY);
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
