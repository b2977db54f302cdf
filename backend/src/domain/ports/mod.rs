//! Domain ports.
//!
//! Driving ports (`LoginService`, `SessionUserQuery`, `DirectoryReset`) are
//! called by inbound adapters. The driven port (`UserDirectory`) is implemented
//! by outbound adapters.

mod directory_reset;
mod login_service;
mod macros;
mod session_user_query;
mod user_directory;

pub(crate) use macros::define_port_error;

pub use directory_reset::DirectoryReset;
pub use login_service::LoginService;
pub use session_user_query::SessionUserQuery;
pub use user_directory::{SeedOutcome, UserDirectory, UserDirectoryError};
