//! HTTP adapter mapping for domain errors and request rejections.
//!
//! Purpose: keep the domain error type HTTP-agnostic while giving every
//! failure a consistent plain-text response. Domain error codes double as
//! HTTP status codes; existing clients branch on those numbers.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use tracing::debug;

use crate::domain::{Error, ErrorCode};
use crate::middleware::TraceId;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const WRONG_METHOD_MESSAGE: &str = "You are using the wrong method for sending the request. \
                                    Please select the correct method.";

fn status_for(code: ErrorCode) -> StatusCode {
    StatusCode::from_u16(code.get()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn plain_text(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::plaintext())
        .body(body)
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        debug!(
            kind = %self.kind(),
            code = %self.code(),
            trace_id = ?TraceId::current().map(|id| id.to_string()),
            "domain error translated"
        );
        plain_text(self.status_code(), self.message().to_owned())
    }
}

/// Requests the framework refuses before any handler runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestRejection {
    /// The route exists but not for this HTTP method.
    #[error("{message}", message = WRONG_METHOD_MESSAGE)]
    WrongMethod,
    /// A path, query or body value was missing or malformed.
    #[error("{message}")]
    NoSuchElement { message: String },
}

impl RequestRejection {
    /// Wrap an extractor failure message.
    pub fn no_such_element(message: impl Into<String>) -> Self {
        Self::NoSuchElement {
            message: message.into(),
        }
    }
}

impl ResponseError for RequestRejection {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        plain_text(self.status_code(), self.to_string())
    }
}

/// Fallback service for resources hit with an unsupported method.
pub async fn reject_wrong_method(req: HttpRequest) -> Result<HttpResponse, RequestRejection> {
    debug!(method = %req.method(), path = req.path(), "unsupported method");
    Err(RequestRejection::WrongMethod)
}

/// Extractor error handler turning path, query and JSON failures into
/// [`RequestRejection::NoSuchElement`].
///
/// # Examples
/// ```
/// use actix_web::error::PathError;
/// use actix_web::web;
/// use employee_backend::inbound::http::error::reject_extraction;
///
/// let _config = web::PathConfig::default().error_handler(reject_extraction::<PathError>);
/// ```
pub fn reject_extraction<E>(err: E, req: &HttpRequest) -> actix_web::Error
where
    E: std::fmt::Display,
{
    let message = err.to_string();
    debug!(path = req.path(), %message, "request input rejected");
    RequestRejection::no_such_element(message).into()
}

#[cfg(test)]
mod tests;
