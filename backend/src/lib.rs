//! Session authentication backend library.
//!
//! Layout follows a ports-and-adapters split:
//! - [`domain`]: users, session state, errors and the session authenticator.
//! - [`inbound`]: actix-web handlers, session wrapper and cookie settings.
//! - [`outbound`]: PostgreSQL and in-memory user directories.
//! - [`middleware`]: request tracing.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
