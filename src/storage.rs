//! Local Storage Adapter
//!
//! Persists the whole `TodoItemsState` as one JSON blob under a fixed
//! key and watches for the same key changing in another tab.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::models::TodoItemsState;

/// Key holding the serialized widget state
pub const STORAGE_KEY: &str = "todoListState";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|win| win.local_storage().ok().flatten())
}

/// Read and parse the persisted snapshot.
///
/// Malformed blobs are discarded, not surfaced: the widget falls back
/// to an empty list. Typed parsing doubles as the schema check, so an
/// item missing its id or title rejects the whole snapshot.
pub fn load() -> Option<TodoItemsState> {
    let raw = local_storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    let parsed = parse_snapshot(&raw);
    if parsed.is_none() {
        web_sys::console::debug_1(&"[STORAGE] discarding unparseable snapshot".into());
    }
    parsed
}

/// Serialize the full state and write it under `STORAGE_KEY`.
/// Always a complete snapshot; there are no partial writes.
pub fn save(state: &TodoItemsState) -> Result<(), String> {
    let json = serde_json::to_string(state).map_err(|e| e.to_string())?;
    let storage = local_storage().ok_or_else(|| "local storage unavailable".to_string())?;
    storage
        .set_item(STORAGE_KEY, &json)
        .map_err(|_| "local storage write rejected".to_string())
}

/// Run `callback` whenever another tab writes `STORAGE_KEY`. The
/// platform only fires the event in *other* documents, so this tab's
/// own saves never loop back.
pub fn subscribe_external_changes(callback: impl Fn() + 'static) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(
        move |ev: web_sys::StorageEvent| {
            if ev.key().as_deref() == Some(STORAGE_KEY) {
                callback();
            }
        },
    );
    let _ = win.add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
    // Listener lives for the whole page session
    closure.forget();
}

fn parse_snapshot(raw: &str) -> Option<TodoItemsState> {
    serde_json::from_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_snapshot() {
        let state = parse_snapshot(
            r#"{"todoItems":[{"id":"a","title":"Buy milk","details":"2 liters","done":false}]}"#,
        )
        .expect("should parse");

        assert_eq!(state.todo_items.len(), 1);
        assert_eq!(state.todo_items[0].title, "Buy milk");
        assert_eq!(state.todo_items[0].details.as_deref(), Some("2 liters"));
    }

    #[test]
    fn test_parse_malformed_json_is_discarded() {
        assert_eq!(parse_snapshot("{not json"), None);
        assert_eq!(parse_snapshot(""), None);
    }

    #[test]
    fn test_parse_wrong_shape_is_discarded() {
        // Parses as JSON but violates the item shape
        assert_eq!(parse_snapshot(r#"{"todoItems":[{"title":"no id"}]}"#), None);
        assert_eq!(parse_snapshot(r#"{"todoItems":42}"#), None);
    }

    #[test]
    fn test_saved_blob_round_trips() {
        let state = parse_snapshot(r#"{"todoItems":[{"id":"a","title":"Buy milk","done":true}]}"#)
            .expect("should parse");
        let json = serde_json::to_string(&state).expect("serialize");

        assert_eq!(parse_snapshot(&json), Some(state));
    }
}
