//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into `{"error": "..."}` responses with a
//! status code per failure category.
//!
//! Infrastructure failures are reported as such rather than as client
//! errors: a failed user-service call is a 502 and a failed repository call
//! is a 500 whose detail is logged but never sent to the client.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message sent in place of storage failure detail.
pub const REDACTED_MESSAGE: &str = "internal server error";

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable failure description.
    #[schema(example = "user not found")]
    pub error: String,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorCode::ReferencedEntityMissing => StatusCode::NOT_FOUND,
        ErrorCode::DependencyUnavailable => StatusCode::BAD_GATEWAY,
        ErrorCode::StorageError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn public_message(error: &Error) -> &str {
    if matches!(error.code(), ErrorCode::StorageError) {
        REDACTED_MESSAGE
    } else {
        error.message()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        match self.code() {
            ErrorCode::StorageError => error!(error = %self, "storage failure"),
            ErrorCode::DependencyUnavailable => warn!(error = %self, "dependency failure"),
            _ => {}
        }

        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: public_message(self).to_owned(),
        })
    }
}

/// Reject undecodable request bodies with a 400 in the common error shape.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_input(err.to_string()).into()
}

/// Reject unparsable path parameters (e.g. `/orders/abc`) with a 400.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_input(format!("invalid id: {err}")).into()
}

/// Extractor configuration shared by both services.
///
/// Bodies are decoded as JSON whatever `Content-Type` says; only a decode
/// failure is a 400.
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    let json = web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error_handler);
    cfg.app_data(json)
        .app_data(web::PathConfig::default().error_handler(path_error_handler));
}
