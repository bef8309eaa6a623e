//! Todo Models
//!
//! Data structures persisted to local storage, plus id generation.

use reactive_stores::Store;
use serde::{Deserialize, Serialize};

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Opaque unique id, generated at creation, never reused
    pub id: String,
    pub title: String,
    /// Absent or empty means no details paragraph is shown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Hand-edited snapshots may omit this; an undefined flag would
    /// break the render-order comparator
    #[serde(default)]
    pub done: bool,
}

/// Caller-supplied fields for a new item. The reducer fills in the id
/// and defaults `done` to false when not overridden.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTodoItem {
    pub title: String,
    pub details: Option<String>,
    pub done: Option<bool>,
}

/// Replacement values carried by an edit action
#[derive(Debug, Clone, PartialEq)]
pub struct TodoEditValue {
    pub title: String,
    pub details: Option<String>,
}

/// Full widget state, serialized as one JSON blob
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Store)]
pub struct TodoItemsState {
    #[serde(rename = "todoItems")]
    pub todo_items: Vec<TodoItem>,
}

/// Generate a fresh item id: base-36 timestamp plus a base-36 random tail.
#[cfg(target_arch = "wasm32")]
pub fn generate_id() -> String {
    let millis = js_sys::Date::now() as u64;
    let random = (js_sys::Math::random() * 1e16) as u64;
    format!("{}-{}", to_base36(millis), to_base36(random))
}

/// Off wasm32 (unit tests) there is no JS clock; a process-local counter
/// keeps ids unique.
#[cfg(not(target_arch = "wasm32"))]
pub fn generate_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static NEXT_ID: AtomicU64 = AtomicU64::new(1);
    format!("todo-{}", to_base36(NEXT_ID.fetch_add(1, Ordering::Relaxed)))
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize] as char);
        n /= 36;
    }
    out.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36 + 1), "101");
    }

    #[test]
    fn test_generate_id_is_unique() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_item_without_details_serializes_without_key() {
        let item = TodoItem {
            id: "a1".to_string(),
            title: "Water plants".to_string(),
            details: None,
            done: false,
        };
        let json = serde_json::to_string(&item).expect("serialize");
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_state_blob_uses_todo_items_key() {
        let state = TodoItemsState::default();
        let json = serde_json::to_string(&state).expect("serialize");
        assert_eq!(json, r#"{"todoItems":[]}"#);
    }

    #[test]
    fn test_item_missing_done_defaults_to_false() {
        let item: TodoItem =
            serde_json::from_str(r#"{"id":"a1","title":"Water plants"}"#).expect("parse");
        assert!(!item.done);
        assert_eq!(item.details, None);
    }
}
