//! HTTP adapter mapping for domain errors.
//!
//! Every failure leaves the service as the same JSON envelope:
//!
//! ```text
//! {"code":"not_found","message":"Item not found","status":404,"traceId":"…"}
//! ```
//!
//! Internal errors are redacted before they reach the client.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Wire shape of an error response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorEnvelope<'a> {
    code: ErrorCode,
    message: &'a str,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a Value>,
}

impl<'a> ErrorEnvelope<'a> {
    fn from_error(error: &'a Error, status: StatusCode) -> Self {
        let internal = matches!(error.code(), ErrorCode::InternalError);
        Self {
            code: error.code(),
            message: if internal {
                REDACTED_MESSAGE
            } else {
                error.message()
            },
            status: status.as_u16(),
            trace_id: error.trace_id(),
            details: if internal { None } else { error.details() },
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, trace_id = self.trace_id(), "request failed");
        }

        let mut builder = HttpResponse::build(status);
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ErrorEnvelope::from_error(self, status))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(REDACTED_MESSAGE)
    }
}

/// Convert JSON extractor failures into `invalid_request` errors.
///
/// Register through `web::JsonConfig::default().error_handler(json_error_handler)`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "rejected request body");
    let reason = match &err {
        JsonPayloadError::ContentType => "unsupported_content_type",
        JsonPayloadError::Deserialize(_) => "malformed_json",
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "payload_too_large"
        }
        _ => "unreadable_body",
    };
    Error::invalid_request("Request body must be a JSON object")
        .with_details(json!({ "reason": reason, "error": err.to_string() }))
        .into()
}

/// Fallback service answering unmatched routes with the JSON 404 envelope.
pub async fn route_not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(Error::not_found("Route not found")
        .with_details(json!({ "method": req.method().as_str(), "path": req.path() })))
}
