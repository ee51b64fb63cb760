//! HTTP rendering of domain errors.
//!
//! Authentication failures become redirects to the login form with no body;
//! everything else becomes an HTML error page. Internal error messages are
//! replaced with a generic one before rendering.

use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, ResponseError};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

use super::accounts::LOGIN_PATH;
use super::views::{ErrorPage, Nav, redirect_to, render_with_status};

/// Result alias for page handlers.
pub type PageResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::Unauthorized | ErrorCode::InvalidCredentials => StatusCode::FOUND,
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn heading_for(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::InvalidRequest => "Bad request",
        ErrorCode::NotFound => "Not found",
        ErrorCode::Conflict => "Conflict",
        ErrorCode::ServiceUnavailable => "Temporarily unavailable",
        _ => "Something went wrong",
    }
}

fn public_message(error: &Error) -> &str {
    match error.code() {
        ErrorCode::InternalError => "Internal server error",
        ErrorCode::ServiceUnavailable => "The service is temporarily unavailable. Please try again.",
        _ => error.message(),
    }
}

fn error_page(error: &Error, status: StatusCode) -> HttpResponse {
    let heading = heading_for(error.code());
    let page = ErrorPage {
        nav: Nav::default(),
        status: status.as_u16(),
        heading,
        message: public_message(error),
        trace_id: error.trace_id().unwrap_or_default(),
    };
    render_with_status(status, &page).unwrap_or_else(|render_error| {
        error!(error = %render_error, "error page failed to render");
        HttpResponse::build(status)
            .content_type(ContentType::plaintext())
            .body(heading)
    })
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self.code() {
            ErrorCode::InternalError | ErrorCode::ServiceUnavailable => error!(
                code = %self.code(),
                message = self.message(),
                trace_id = ?self.trace_id(),
                "request failed"
            ),
            _ => warn!(code = %self.code(), message = self.message(), "request rejected"),
        }

        let mut response = if status == StatusCode::FOUND {
            redirect_to(LOGIN_PATH)
        } else {
            error_page(self, status)
        };
        let trace_header = self
            .trace_id()
            .and_then(|id| header::HeaderValue::from_str(id).ok());
        if let Some(value) = trace_header {
            response
                .headers_mut()
                .insert(header::HeaderName::from_static(TRACE_ID_HEADER), value);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;

    async fn body_text(response: HttpResponse) -> String {
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        String::from_utf8(bytes.to_vec()).expect("utf8 body")
    }

    #[rstest]
    #[case(Error::unauthorized("login required"))]
    #[case(Error::invalid_credentials("bad password"))]
    fn auth_failures_redirect_to_login(#[case] error: Error) {
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
            Some(LOGIN_PATH)
        );
    }

    #[rstest]
    #[case(Error::not_found("book missing"), StatusCode::NOT_FOUND)]
    #[case(Error::invalid_request("bad id"), StatusCode::BAD_REQUEST)]
    #[case(Error::conflict("taken"), StatusCode::CONFLICT)]
    #[case(Error::service_unavailable("pool"), StatusCode::SERVICE_UNAVAILABLE)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn other_failures_render_pages(#[case] error: Error, #[case] expected: StatusCode) {
        let response = error.error_response();
        assert_eq!(response.status(), expected);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/html"), "{content_type}");
    }

    #[actix_web::test]
    async fn internal_details_are_redacted() {
        let response = Error::internal("password column missing").error_response();
        let body = body_text(response).await;
        assert!(body.contains("Internal server error"));
        assert!(!body.contains("password column missing"));
    }

    #[actix_web::test]
    async fn trace_id_is_echoed() {
        let error = Error::not_found("gone").with_trace_id("abc123");
        let response = error.error_response();
        assert_eq!(
            response.headers().get(TRACE_ID_HEADER).and_then(|v| v.to_str().ok()),
            Some("abc123")
        );
        assert!(body_text(response).await.contains("abc123"));
    }
}
