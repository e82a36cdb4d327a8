use serde_json::Value;

/// Resolve a path against a JSON document.
///
/// Descends one object key per segment. Returns `None` as soon as the
/// current value is not an object or lacks the segment as a key — `None`
/// means "not present", while an explicit JSON `null` in the document
/// resolves to `Some(&Value::Null)`.
///
/// The empty path resolves to the document itself.
///
/// # Example
///
/// ```
/// use json_filter_path::{resolve, split_path};
/// use serde_json::json;
///
/// let doc = json!({"foo": {"bar": 42}});
/// assert_eq!(resolve(&doc, &split_path("foo.bar")), Some(&json!(42)));
/// assert_eq!(resolve(&doc, &split_path("foo.missing")), None);
/// assert_eq!(resolve(&doc, &[]), Some(&doc));
/// ```
pub fn resolve<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(val);
    }

    let mut current = val;
    for path_step in path {
        match current {
            Value::Object(map) => {
                current = map.get(path_step)?;
            }
            _ => return None,
        }
    }
    Some(current)
}
