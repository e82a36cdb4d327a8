use serde_json::{Map, Value};

/// Store a value at a path, creating intermediate objects as needed.
///
/// For every segment but the last, a missing key — or a key holding a
/// non-object value — is replaced with an empty object before descending.
/// Overwriting a non-object intermediate discards the previous value;
/// callers that need to preserve mixed shapes must resolve first.
///
/// At the last segment the value is inserted unconditionally. The call is a
/// no-op when `root` is not an object or the path is empty.
///
/// # Example
///
/// ```
/// use json_filter_path::{assign, split_path};
/// use serde_json::json;
///
/// let mut doc = json!({});
/// assign(&mut doc, &split_path("a.b"), json!(1));
/// assign(&mut doc, &split_path("a.c"), json!(2));
/// assert_eq!(doc, json!({"a": {"b": 1, "c": 2}}));
/// ```
pub fn assign(root: &mut Value, path: &[String], value: Value) {
    if path.is_empty() || !root.is_object() {
        return;
    }

    let last = path.len() - 1;
    let mut current = root;
    for path_step in &path[..last] {
        let map = match current {
            Value::Object(map) => map,
            _ => return,
        };
        let slot = map
            .entry(path_step.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        current = slot;
    }

    if let Value::Object(map) = current {
        map.insert(path[last].clone(), value);
    }
}
