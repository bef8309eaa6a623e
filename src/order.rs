//! Display Ordering
//!
//! Render-order helper for the todo list. Display order is derived at
//! render time and never written back to storage.

use crate::models::TodoItem;

/// Sort items for rendering: incomplete first, completed after.
///
/// The sort must be stable, not merely "sorts correctly": ties keep the
/// storage order, so toggling one item never shuffles its neighbors.
pub fn display_order(items: &[TodoItem]) -> Vec<TodoItem> {
    let mut ordered = items.to_vec();
    ordered.sort_by_key(|item| item.done);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, done: bool) -> TodoItem {
        TodoItem {
            id: id.to_string(),
            title: format!("Item {id}"),
            details: None,
            done,
        }
    }

    fn ids(items: &[TodoItem]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn test_incomplete_items_come_first() {
        let items = vec![
            make_item("a", true),
            make_item("b", false),
            make_item("c", true),
            make_item("d", false),
        ];

        let ordered = display_order(&items);

        assert_eq!(ids(&ordered), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_ties_keep_storage_order() {
        let items = vec![
            make_item("a", false),
            make_item("b", false),
            make_item("c", false),
        ];

        let ordered = display_order(&items);

        assert_eq!(ids(&ordered), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_all_done_keeps_storage_order() {
        let items = vec![make_item("a", true), make_item("b", true)];

        let ordered = display_order(&items);

        assert_eq!(ids(&ordered), vec!["a", "b"]);
    }

    #[test]
    fn test_storage_sequence_is_untouched() {
        let items = vec![make_item("a", true), make_item("b", false)];
        let before = items.clone();

        let _ = display_order(&items);

        assert_eq!(items, before);
    }
}
