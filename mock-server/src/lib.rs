use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub secret: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemDto {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
}

impl From<&TodoItem> for TodoItemDto {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            is_complete: item.is_complete,
        }
    }
}

#[derive(Default)]
pub struct Store {
    last_id: i64,
    items: BTreeMap<i64, TodoItem>,
}

impl Store {
    fn insert(&mut self, mut item: TodoItem) -> TodoItem {
        self.last_id += 1;
        item.id = self.last_id;
        self.items.insert(item.id, item.clone());
        item
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/TodoItems", get(list_items).post(create_item))
        .route("/api/TodoItems/test", get(list_test_items).post(create_test_item))
        .route(
            "/api/TodoItems/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn created(item_id: i64, body: impl Serialize) -> impl IntoResponse {
    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/TodoItems/{item_id}"))],
        Json(body),
    )
}

async fn list_items(State(db): State<Db>) -> Json<Vec<TodoItemDto>> {
    let store = db.read().await;
    Json(store.items.values().map(TodoItemDto::from).collect())
}

async fn get_item(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<TodoItemDto>, StatusCode> {
    let store = db.read().await;
    store
        .items
        .get(&id)
        .map(|item| Json(TodoItemDto::from(item)))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_item(State(db): State<Db>, Json(input): Json<TodoItemDto>) -> impl IntoResponse {
    let item = db.write().await.insert(TodoItem {
        id: 0,
        name: input.name,
        is_complete: input.is_complete,
        secret: None,
    });
    created(item.id, TodoItemDto::from(&item))
}

async fn update_item(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<TodoItemDto>,
) -> StatusCode {
    if id != input.id {
        return StatusCode::BAD_REQUEST;
    }
    let mut store = db.write().await;
    match store.items.get_mut(&id) {
        Some(item) => {
            item.name = input.name;
            item.is_complete = input.is_complete;
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_item(State(db): State<Db>, Path(id): Path<i64>) -> StatusCode {
    let mut store = db.write().await;
    match store.items.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}

async fn create_test_item(State(db): State<Db>, Json(input): Json<TodoItem>) -> impl IntoResponse {
    let item = db.write().await.insert(input);
    created(item.id, item)
}

async fn list_test_items(State(db): State<Db>) -> Json<Vec<TodoItem>> {
    let store = db.read().await;
    Json(store.items.values().cloned().collect())
}
