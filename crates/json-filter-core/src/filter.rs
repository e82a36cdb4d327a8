//! The projection engine: resolve a selection of dotted paths against an
//! input value and re-assemble the hits per output mode.

use serde_json::{Map, Value};

use json_filter_path::{assign, resolve, split_path};

use crate::error::FilterError;
use crate::mode::Mode;

/// Project the selected paths out of `input`.
///
/// Guards, checked in order, each short-circuiting to `None` ("no data"):
///
/// 1. `input` is `None` or JSON `null`;
/// 2. `selected` is not an array, or is an empty array.
///
/// Selection entries that are not non-empty strings are skipped. Resolution
/// and assembly follow selection order; in `object` mode paths sharing a
/// prefix merge into one branch, and a duplicated full path keeps the last
/// write.
///
/// `None` is returned when nothing resolves — absence, not an empty
/// container. A projection with at least one resolvable path always returns
/// `Some`.
///
/// # Example
///
/// ```
/// use json_filter_core::{project, Mode};
/// use serde_json::json;
///
/// let input = json!({"a": {"b": 1, "c": 2}, "d": 3});
/// let result = project(Some(&input), &json!(["a.b", "d"]), Mode::Array);
/// assert_eq!(
///     result,
///     Some(json!([
///         {"keyPath": "a.b", "value": 1},
///         {"keyPath": "d", "value": 3}
///     ]))
/// );
/// ```
pub fn project(input: Option<&Value>, selected: &Value, mode: Mode) -> Option<Value> {
    let input = match input {
        Some(value) if !value.is_null() => value,
        _ => return None,
    };
    let paths = match selected.as_array() {
        Some(paths) if !paths.is_empty() => paths,
        _ => return None,
    };

    match mode {
        Mode::Object => {
            let mut result = Value::Object(Map::new());
            for path in selected_paths(paths) {
                let segments = split_path(path);
                if let Some(value) = resolve(input, &segments) {
                    assign(&mut result, &segments, value.clone());
                }
            }
            match result {
                Value::Object(map) if !map.is_empty() => Some(Value::Object(map)),
                _ => None,
            }
        }
        Mode::Flattened => {
            let mut result = Map::new();
            for path in selected_paths(paths) {
                if let Some(value) = resolve(input, &split_path(path)) {
                    result.insert(path.to_string(), value.clone());
                }
            }
            if result.is_empty() {
                None
            } else {
                Some(Value::Object(result))
            }
        }
        Mode::Array => {
            let mut result = Vec::new();
            for path in selected_paths(paths) {
                if let Some(value) = resolve(input, &split_path(path)) {
                    let mut entry = Map::new();
                    entry.insert("keyPath".to_string(), Value::String(path.to_string()));
                    entry.insert("value".to_string(), value.clone());
                    result.push(Value::Object(entry));
                }
            }
            if result.is_empty() {
                None
            } else {
                Some(Value::Array(result))
            }
        }
    }
}

/// Project with the mode given in its wire string form.
///
/// The mode is parsed before anything else, so an unknown mode raises
/// [`FilterError::InvalidMode`] regardless of input or selection.
///
/// # Errors
///
/// Returns [`FilterError::InvalidMode`] when `mode` is not one of `object`,
/// `flattened`, `array`.
///
/// # Example
///
/// ```
/// use json_filter_core::filter_json;
/// use serde_json::json;
///
/// let input = json!({"a": 1});
/// let result = filter_json(Some(&input), &json!(["a"]), "flattened").unwrap();
/// assert_eq!(result, Some(json!({"a": 1})));
///
/// assert!(filter_json(Some(&input), &json!(["a"]), "bogus").is_err());
/// ```
pub fn filter_json(
    input: Option<&Value>,
    selected: &Value,
    mode: &str,
) -> Result<Option<Value>, FilterError> {
    let mode = mode.parse::<Mode>()?;
    Ok(project(input, selected, mode))
}

/// Selection entries that actually name a path: non-empty strings only.
fn selected_paths(paths: &[Value]) -> impl Iterator<Item = &str> {
    paths
        .iter()
        .filter_map(Value::as_str)
        .filter(|path| !path.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input() -> Value {
        json!({"a": {"b": 1, "c": 2}, "d": 3})
    }

    #[test]
    fn test_object_mode_reconstructs_selected_branches() {
        let result = project(Some(&input()), &json!(["a.b", "d"]), Mode::Object);
        assert_eq!(result, Some(json!({"a": {"b": 1}, "d": 3})));
    }

    #[test]
    fn test_flattened_mode_uses_literal_keys() {
        let result = project(Some(&input()), &json!(["a.b", "d"]), Mode::Flattened);
        assert_eq!(result, Some(json!({"a.b": 1, "d": 3})));
    }

    #[test]
    fn test_array_mode_emits_key_path_entries() {
        let result = project(Some(&input()), &json!(["a.b", "d"]), Mode::Array);
        assert_eq!(
            result,
            Some(json!([
                {"keyPath": "a.b", "value": 1},
                {"keyPath": "d", "value": 3}
            ]))
        );
    }

    #[test]
    fn test_none_input_yields_no_data() {
        for mode in [Mode::Object, Mode::Flattened, Mode::Array] {
            assert_eq!(project(None, &json!(["a"]), mode), None);
        }
    }

    #[test]
    fn test_null_input_yields_no_data() {
        for mode in [Mode::Object, Mode::Flattened, Mode::Array] {
            assert_eq!(project(Some(&Value::Null), &json!(["a"]), mode), None);
        }
    }

    #[test]
    fn test_empty_selection_yields_no_data() {
        for mode in [Mode::Object, Mode::Flattened, Mode::Array] {
            assert_eq!(project(Some(&input()), &json!([]), mode), None);
        }
    }

    #[test]
    fn test_non_array_selection_yields_no_data() {
        for selected in [json!("a.b"), json!({"path": "a.b"}), json!(42), json!(null)] {
            assert_eq!(project(Some(&input()), &selected, Mode::Object), None);
        }
    }

    #[test]
    fn test_unresolved_paths_yield_no_data() {
        for mode in [Mode::Object, Mode::Flattened, Mode::Array] {
            assert_eq!(project(Some(&input()), &json!(["a.x"]), mode), None);
        }
    }

    #[test]
    fn test_invalid_entries_are_skipped() {
        let selected = json!([42, "", null, "d", {"k": "v"}, ["a.b"]]);
        let result = project(Some(&input()), &selected, Mode::Flattened);
        assert_eq!(result, Some(json!({"d": 3})));
    }

    #[test]
    fn test_all_invalid_entries_yield_no_data() {
        let selected = json!([42, "", null]);
        assert_eq!(project(Some(&input()), &selected, Mode::Object), None);
    }

    #[test]
    fn test_shared_prefix_merges() {
        let result = project(Some(&input()), &json!(["a.b", "a.c"]), Mode::Object);
        assert_eq!(result, Some(json!({"a": {"b": 1, "c": 2}})));
    }

    #[test]
    fn test_duplicate_path_last_write_wins() {
        let result = project(Some(&input()), &json!(["a.b", "a.b"]), Mode::Object);
        assert_eq!(result, Some(json!({"a": {"b": 1}})));

        let result = project(Some(&input()), &json!(["a.b", "a.b"]), Mode::Flattened);
        assert_eq!(result, Some(json!({"a.b": 1})));

        // Array mode keeps one entry per occurrence
        let result = project(Some(&input()), &json!(["a.b", "a.b"]), Mode::Array);
        assert_eq!(
            result,
            Some(json!([
                {"keyPath": "a.b", "value": 1},
                {"keyPath": "a.b", "value": 1}
            ]))
        );
    }

    #[test]
    fn test_selection_order_is_preserved() {
        let result = project(Some(&input()), &json!(["d", "a.b"]), Mode::Array)
            .expect("projection should produce data");
        let entries = result.as_array().unwrap();
        assert_eq!(entries[0]["keyPath"], json!("d"));
        assert_eq!(entries[1]["keyPath"], json!("a.b"));

        let result = project(Some(&input()), &json!(["d", "a.b"]), Mode::Flattened)
            .expect("projection should produce data");
        let keys: Vec<&str> = result.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["d", "a.b"]);
    }

    #[test]
    fn test_null_leaf_is_selected() {
        // An explicit null resolves and counts as data
        let doc = json!({"a": null});
        let result = project(Some(&doc), &json!(["a"]), Mode::Object);
        assert_eq!(result, Some(json!({"a": null})));
    }

    #[test]
    fn test_branch_selection_copies_subtree() {
        let result = project(Some(&input()), &json!(["a"]), Mode::Object);
        assert_eq!(result, Some(json!({"a": {"b": 1, "c": 2}})));
    }

    #[test]
    fn test_idempotence() {
        let selected = json!(["a.b", "d", "a.c"]);
        let first = project(Some(&input()), &selected, Mode::Object);
        let second = project(Some(&input()), &selected, Mode::Object);
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let doc = input();
        let before = doc.clone();
        let _ = project(Some(&doc), &json!(["a.b", "d"]), Mode::Object);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_filter_json_parses_mode() {
        let doc = input();
        let result = filter_json(Some(&doc), &json!(["d"]), "array").unwrap();
        assert_eq!(result, Some(json!([{"keyPath": "d", "value": 3}])));
    }

    #[test]
    fn test_filter_json_invalid_mode_wins_over_guards() {
        // The mode is rejected even when the guards would short-circuit
        let err = filter_json(None, &json!([]), "bogus").unwrap_err();
        assert_eq!(err, FilterError::InvalidMode("bogus".to_string()));
    }
}
