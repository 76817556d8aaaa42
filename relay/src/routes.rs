//! Route table and handlers for `/api/TodoItems`.
//!
//! Each handler builds one upstream request with `TodoClient`, executes it,
//! and parses the reply. Failures are translated by `RelayError`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use todo_core::{TodoClient, TodoItem, TodoItemDto, ITEMS_PATH};

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::upstream::Upstream;

/// Handler state: the request builder for the configured upstream and the
/// pooled client that executes its requests.
#[derive(Debug, Clone)]
pub struct AppState {
    client: Arc<TodoClient>,
    upstream: Upstream,
}

impl AppState {
    pub fn new(config: &RelayConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Arc::new(TodoClient::new(config.base_url.as_str())),
            upstream: Upstream::new()?,
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/TodoItems", get(list_items).post(create_item))
        .route("/api/TodoItems/test", get(list_test_items).post(create_test_item))
        .route(
            "/api/TodoItems/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(state)
}

/// 201 with `Location` pointing at the get-by-id route.
fn created_at<T: Serialize>(id: i64, body: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("{ITEMS_PATH}/{id}"))],
        Json(body),
    )
        .into_response()
}

async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<TodoItemDto>>, RelayError> {
    let response = state.upstream.execute(state.client.build_list_items()).await?;
    Ok(Json(state.client.parse_list_items(response)?))
}

async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TodoItemDto>, RelayError> {
    let response = state.upstream.execute(state.client.build_get_item(id)).await?;
    Ok(Json(state.client.parse_get_item(response)?))
}

async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(item): Json<TodoItemDto>,
) -> Result<StatusCode, RelayError> {
    let request = state.client.build_update_item(id, &item)?;
    let response = state.upstream.execute(request).await?;
    state.client.parse_update_item(response)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn create_item(
    State(state): State<AppState>,
    Json(item): Json<TodoItemDto>,
) -> Result<Response, RelayError> {
    let request = state.client.build_create_item(&item)?;
    let response = state.upstream.execute(request).await?;
    let created = state.client.parse_create_item(response)?;
    tracing::info!(id = created.id, "Created todo item");
    Ok(created_at(created.id, created))
}

async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, RelayError> {
    let response = state.upstream.execute(state.client.build_delete_item(id)).await?;
    state.client.parse_delete_item(response)?;
    Ok(StatusCode::NO_CONTENT)
}

// Testing only: exposes the secret field. Not for production traffic.
async fn create_test_item(
    State(state): State<AppState>,
    Json(item): Json<TodoItem>,
) -> Result<Response, RelayError> {
    let request = state.client.build_create_test_item(&item)?;
    let response = state.upstream.execute(request).await?;
    let created = state.client.parse_create_test_item(response)?;
    Ok(created_at(created.id, created))
}

// Testing only: exposes the secret field. Not for production traffic.
async fn list_test_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoItem>>, RelayError> {
    let response = state.upstream.execute(state.client.build_list_test_items()).await?;
    Ok(Json(state.client.parse_list_test_items(response)?))
}
