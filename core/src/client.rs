//! Stateless request builder and response parser for the upstream todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each upstream operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round trip.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{TodoItem, TodoItemDto};

/// Path of the todo collection, shared by the upstream and the relay.
pub const ITEMS_PATH: &str = "/api/TodoItems";

/// Stateless client for the upstream todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_items(&self) -> HttpRequest {
        self.bare_request(HttpMethod::Get, ITEMS_PATH.to_string())
    }

    pub fn build_get_item(&self, id: i64) -> HttpRequest {
        self.bare_request(HttpMethod::Get, format!("{ITEMS_PATH}/{id}"))
    }

    pub fn build_update_item(&self, id: i64, item: &TodoItemDto) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, format!("{ITEMS_PATH}/{id}"), item)
    }

    pub fn build_create_item(&self, item: &TodoItemDto) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, ITEMS_PATH.to_string(), item)
    }

    pub fn build_delete_item(&self, id: i64) -> HttpRequest {
        self.bare_request(HttpMethod::Delete, format!("{ITEMS_PATH}/{id}"))
    }

    /// Test-only upstream endpoint that stores the `secret` field.
    pub fn build_create_test_item(&self, item: &TodoItem) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, format!("{ITEMS_PATH}/test"), item)
    }

    /// Test-only upstream endpoint that lists items with their `secret`.
    pub fn build_list_test_items(&self) -> HttpRequest {
        self.bare_request(HttpMethod::Get, format!("{ITEMS_PATH}/test"))
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<TodoItemDto>, ApiError> {
        parse_json(response)
    }

    pub fn parse_get_item(&self, response: HttpResponse) -> Result<TodoItemDto, ApiError> {
        parse_json(response)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<TodoItemDto, ApiError> {
        parse_json(response)
    }

    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_create_test_item(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        parse_json(response)
    }

    pub fn parse_list_test_items(&self, response: HttpResponse) -> Result<Vec<TodoItem>, ApiError> {
        parse_json(response)
    }

    fn bare_request(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request<T: Serialize>(
        &self,
        method: HttpMethod,
        path: String,
        payload: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    match response.status {
        400 => Err(ApiError::BadRequest),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::HttpError {
            status,
            content_type: response.header("content-type").map(str::to_string),
            body: response.body.clone(),
        }),
    }
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}
