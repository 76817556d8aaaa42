//! Error types for the upstream todo contract.
//!
//! # Design
//! `BadRequest` and `NotFound` get dedicated variants because the relay
//! surfaces them as bare 400/404 responses. Every other non-2xx response lands
//! in `HttpError` with the raw status code, media type, and body so the
//! caller can forward it unchanged.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The upstream returned 400.
    #[error("upstream rejected the request")]
    BadRequest,

    /// The upstream returned 404: the requested item does not exist.
    #[error("resource not found")]
    NotFound,

    /// The upstream returned a non-2xx status other than 400 or 404.
    #[error("HTTP {status}: {body}")]
    HttpError {
        status: u16,
        content_type: Option<String>,
        body: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
