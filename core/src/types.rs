//! Todo item payloads exchanged with the upstream service.
//!
//! # Design
//! These types mirror the upstream schema (camelCase JSON) but are defined
//! independently from the mock-server crate. Integration tests catch any
//! schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// Public shape of a todo item. Omits the internal `secret` field, so
/// deserializing an upstream item into this type strips it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemDto {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
}

/// Full todo item including the internal `secret`. Only the test endpoints
/// carry this shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
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

impl From<TodoItem> for TodoItemDto {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            is_complete: item.is_complete,
        }
    }
}
