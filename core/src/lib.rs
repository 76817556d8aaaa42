//! Upstream contract for the Todo microservice.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values for the
//! `/api/TodoItems` resource without touching the network. The relay executes
//! the actual HTTP round trip, which keeps this crate deterministic and
//! testable.
//!
//! # Design
//! - `TodoClient` is stateless: it holds only `base_url`.
//! - Each upstream operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Upstream status codes are classified once, in `parse_*`, into
//!   `ApiError` variants the relay maps to local responses.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{TodoClient, ITEMS_PATH};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{TodoItem, TodoItemDto};
