//! Translation of upstream outcomes into local responses.
//!
//! | upstream                         | local                            |
//! |----------------------------------|----------------------------------|
//! | 400                              | 400, empty body                  |
//! | 404                              | 404, empty body                  |
//! | other non-2xx                    | same status, media type and body |
//! | 2xx with a body we cannot read   | 502                              |
//! | transport failure                | 502                              |
//!
//! Successful PUT and DELETE map to 204 in the handlers themselves.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_core::ApiError;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Upstream(#[from] ApiError),

    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            RelayError::Upstream(ApiError::BadRequest) => StatusCode::BAD_REQUEST.into_response(),
            RelayError::Upstream(ApiError::NotFound) => StatusCode::NOT_FOUND.into_response(),
            RelayError::Upstream(ApiError::HttpError {
                status,
                content_type,
                body,
            }) => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                tracing::warn!(status = status.as_u16(), "Relaying upstream error status");
                let mut response = if body.is_empty() {
                    status.into_response()
                } else {
                    (status, body).into_response()
                };
                if let Some(value) = content_type.and_then(|v| HeaderValue::from_str(&v).ok()) {
                    response.headers_mut().insert(header::CONTENT_TYPE, value);
                }
                response
            }
            RelayError::Upstream(ApiError::DeserializationError(message)) => {
                tracing::error!(error = %message, "Malformed upstream response body");
                (StatusCode::BAD_GATEWAY, "Malformed upstream response").into_response()
            }
            RelayError::Upstream(ApiError::SerializationError(message)) => {
                tracing::error!(error = %message, "Failed to encode upstream request");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            RelayError::Transport(err) => {
                tracing::error!(error = %err, "Upstream request failed");
                (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(err: RelayError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn bad_request_has_empty_body() {
        let (status, body) = render(ApiError::BadRequest.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn not_found_has_empty_body() {
        let (status, body) = render(ApiError::NotFound.into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn other_statuses_pass_through_with_body() {
        let err = ApiError::HttpError {
            status: 503,
            content_type: None,
            body: "maintenance".to_string(),
        };
        let (status, body) = render(err.into()).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, "maintenance");
    }

    #[test]
    fn upstream_media_type_is_kept() {
        let err = ApiError::HttpError {
            status: 409,
            content_type: Some("application/problem+json".to_string()),
            body: r#"{"title":"conflict"}"#.to_string(),
        };
        let response = RelayError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/problem+json"
        );
    }

    #[tokio::test]
    async fn out_of_range_status_becomes_bad_gateway() {
        let err = ApiError::HttpError {
            status: 1000,
            content_type: None,
            body: String::new(),
        };
        let (status, _) = render(err.into()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn malformed_body_is_bad_gateway() {
        let err = ApiError::DeserializationError("expected value".to_string());
        let (status, _) = render(err.into()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn serialization_failure_is_internal_error() {
        let err = ApiError::SerializationError("boom".to_string());
        let (status, _) = render(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
