//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while turning failures
//! into the redirects a browser-driven site expects. No error ever produces a
//! machine-readable body: unauthenticated requests go back to the login page,
//! missing documents go back to the post list, and everything else is logged
//! and sent to the post list with a generic flag.

use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

use crate::domain::trace_id::TRACE_ID_HEADER;
use crate::domain::{DomainError, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, DomainError>;

/// Query flag the post list reads to show the generic failure banner.
pub const REQUEST_FAILED_LOCATION: &str = "/posts?error=request_failed";

/// Redirect target for an error code.
pub fn location_for(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::Unauthorized => "/",
        ErrorCode::NotFound => "/posts",
        _ => REQUEST_FAILED_LOCATION,
    }
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        StatusCode::FOUND
    }

    fn error_response(&self) -> HttpResponse {
        if !matches!(self.code(), ErrorCode::Unauthorized | ErrorCode::NotFound) {
            error!(
                code = ?self.code(),
                message = self.message(),
                trace_id = self.trace_id().unwrap_or_default(),
                "request failed"
            );
        }

        let mut builder = HttpResponse::build(self.status_code());
        builder.insert_header((LOCATION, location_for(self.code())));
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::domain::TraceId;

    fn location(response: &HttpResponse) -> Option<&str> {
        response.headers().get(LOCATION).and_then(|v| v.to_str().ok())
    }

    #[rstest]
    #[case(DomainError::unauthorized("login"), "/")]
    #[case(DomainError::not_found("gone"), "/posts")]
    #[case(DomainError::invalid_request("bad"), REQUEST_FAILED_LOCATION)]
    #[case(DomainError::service_unavailable("down"), REQUEST_FAILED_LOCATION)]
    #[case(DomainError::internal("boom"), REQUEST_FAILED_LOCATION)]
    fn every_error_is_a_found_redirect(#[case] error: DomainError, #[case] expected: &str) {
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), Some(expected));
    }

    #[rstest]
    fn redirect_body_does_not_leak_the_message() {
        let response = DomainError::internal("password column missing").error_response();
        let body = actix_web::body::MessageBody::size(response.body());
        assert_eq!(body, actix_web::body::BodySize::Sized(0));
    }

    #[tokio::test]
    async fn scoped_trace_id_is_echoed_in_header() {
        let trace_id: TraceId = "00000000-0000-0000-0000-000000000000"
            .parse()
            .expect("valid uuid");
        let error = TraceId::scope(trace_id, async { DomainError::internal("boom") }).await;

        let response = error.error_response();
        assert_eq!(
            response
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|v| v.to_str().ok()),
            Some("00000000-0000-0000-0000-000000000000")
        );
    }
}
