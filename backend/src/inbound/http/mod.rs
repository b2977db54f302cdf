//! HTTP inbound adapter exposing the session API.

pub mod admin;
pub mod error;
pub mod health;
pub mod payload;
pub mod routes;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;
