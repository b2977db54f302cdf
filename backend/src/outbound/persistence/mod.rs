//! PostgreSQL persistence adapter using Diesel.
//!
//! Diesel row structs (`models.rs`) and the table definition (`schema.rs`)
//! stay private to this module; callers only see the domain `UserDirectory`
//! port. Connections come from a `bb8` pool driven by `diesel-async`.

mod diesel_user_directory;
mod models;
mod pool;
mod schema;

pub use diesel_user_directory::DieselUserDirectory;
pub use pool::{DbPool, PoolConfig, PoolError};
