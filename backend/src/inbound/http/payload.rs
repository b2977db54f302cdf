//! JSON body extraction settings.
//!
//! Replaces actix's plain-text payload errors with the domain error payload so
//! malformed bodies surface as `400 invalid_request`.

use actix_web::error::JsonPayloadError;
use actix_web::web;
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

/// Largest accepted JSON body in bytes.
pub const MAX_JSON_BODY_BYTES: usize = 16 * 1024;

fn map_payload_error(err: &JsonPayloadError) -> Error {
    let (message, reason) = match err {
        JsonPayloadError::ContentType => ("request body must be JSON", "content_type"),
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            ("request body is too large", "overflow")
        }
        JsonPayloadError::Deserialize(_) => ("request body is not valid JSON", "deserialize"),
        _ => ("request body could not be read", "payload"),
    };
    Error::invalid_request(message).with_details(json!({ "reason": reason }))
}

/// JSON extractor configuration shared by every handler.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_JSON_BODY_BYTES)
        .error_handler(|err, _req| {
            debug!(error = %err, "rejected JSON payload");
            map_payload_error(&err).into()
        })
}
