//! Small collection helpers shared by the editing screens.

use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Moves the element at `from` to `to`, shifting everything in between.
/// Index bounds are the caller's responsibility; out-of-range indices panic.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    items.insert(to, item);
}

/// Structural copy through a serialization round trip. Anything JSON cannot
/// represent is dropped on the way through, so this is a helper for plain
/// data, not a general deep clone.
pub fn deep_clone<T: Serialize + DeserializeOwned>(value: &T) -> Result<T> {
    let json = serde_json::to_value(value)?;
    Ok(serde_json::from_value(json)?)
}

/// Next id for a collection of records: one past the current maximum of
/// `id_field`, with missing or falsy fields counting as 0. An empty
/// collection starts at 1. Uniqueness only holds for the usual append-only
/// sequential case.
pub fn next_id(items: &[Value], id_field: &str) -> i64 {
    if items.is_empty() {
        return 1;
    }
    items
        .iter()
        .map(|item| item.get(id_field).and_then(Value::as_i64).unwrap_or(0))
        .max()
        .unwrap_or(0)
        + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_move_item() {
        let mut items = vec![1, 2, 3, 4];
        move_item(&mut items, 0, 2);
        assert_eq!(items, vec![2, 3, 1, 4]);

        let mut items = vec!["a", "b", "c"];
        move_item(&mut items, 2, 0);
        assert_eq!(items, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_deep_clone_plain_data() {
        let original = json!({"profiles": [{"id": 1, "name": "미미"}]});
        let copy: Value = deep_clone(&original).unwrap();
        assert_eq!(copy, original);
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(&[], "id"), 1);

        let items = vec![json!({"id": 5}), json!({"id": 2})];
        assert_eq!(next_id(&items, "id"), 6);

        let items = vec![json!({"id": 0})];
        assert_eq!(next_id(&items, "id"), 1);

        // Missing field counts as 0.
        let items = vec![json!({"name": "x"}), json!({"id": 3})];
        assert_eq!(next_id(&items, "id"), 4);
    }

    #[test]
    fn test_next_id_custom_field() {
        let items = vec![json!({"songId": 9})];
        assert_eq!(next_id(&items, "songId"), 10);
    }
}
