//! Domain errors as HTTP responses.
//!
//! The status follows [`ErrorCode`]. Internal failures are logged with their
//! real message and answered with a fixed one; every other error is sent as
//! is. The `trace-id` header repeats the payload's `traceId`.

use std::borrow::Cow;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias for handlers whose failures are domain errors.
pub type ApiResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// The payload a client may see for `error`.
fn public_view(error: &Error) -> Cow<'_, Error> {
    match error.code() {
        ErrorCode::InternalError => Cow::Owned(
            Error::internal(REDACTED_MESSAGE).with_trace_id(error.trace_id().unwrap_or_default()),
        ),
        _ => Cow::Borrowed(error),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::InternalError {
            error!(message = %self.message(), trace_id = ?self.trace_id(), "request failed");
        }

        let mut response = HttpResponse::build(self.status_code());
        if let Some(trace_id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, trace_id));
        }
        response.json(&*public_view(self))
    }
}
