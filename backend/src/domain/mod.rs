//! Domain primitives, ports and the session authenticator service.
//!
//! Purpose: keep identity resolution and error semantics independent of
//! actix-web and Diesel. Inbound and outbound adapters depend on this module,
//! never the other way round.
//!
//! Public surface:
//! - `User`, `UserId`, `Username`: directory records.
//! - `SessionState`, `login_username`: session state machine and login input
//!   validation.
//! - `Error`, `ErrorCode`: transport-agnostic failures.
//! - `SessionAuthenticator`: implementation of the driving ports.

pub mod auth;
pub mod error;
pub mod ports;
pub mod session_authenticator;
pub mod trace_id;
pub mod user;

pub use self::auth::{LoginValidationError, SessionState, login_username};
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::session_authenticator::{SEED_USERNAMES, SessionAuthenticator};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserId, UserValidationError, Username};
