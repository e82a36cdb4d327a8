//! The host-facing property contract: read a source value out of a message,
//! decode the selection configuration, and write the projection back.

use serde_json::Value;

use json_filter_path::{assign, resolve, split_path};

use crate::error::FilterError;
use crate::filter::filter_json;

/// The message field addressed by an empty property path.
pub const DEFAULT_PROPERTY: &str = "payload";

/// Read a property from a message by dotted path.
///
/// An empty property names the primary field (`payload`). Returns `None`
/// when the property is not present — an explicit `null` is present.
///
/// # Example
///
/// ```
/// use json_filter_core::get_property;
/// use serde_json::json;
///
/// let msg = json!({"payload": {"data": 7}, "topic": "t"});
/// assert_eq!(get_property(&msg, "payload.data"), Some(&json!(7)));
/// assert_eq!(get_property(&msg, ""), Some(&json!({"data": 7})));
/// assert_eq!(get_property(&msg, "payload.missing"), None);
/// ```
pub fn get_property<'a>(msg: &'a Value, property: &str) -> Option<&'a Value> {
    if property.is_empty() {
        return msg.get(DEFAULT_PROPERTY);
    }
    resolve(msg, &split_path(property))
}

/// Write a property into a message by dotted path.
///
/// An empty property replaces the primary field (`payload`). Intermediate
/// objects are created as needed, with the same overwrite behavior as
/// [`json_filter_path::assign`]. No-op when `msg` is not an object.
pub fn set_property(msg: &mut Value, property: &str, value: Value) {
    if property.is_empty() {
        if let Value::Object(map) = msg {
            map.insert(DEFAULT_PROPERTY.to_string(), value);
        }
        return;
    }
    assign(msg, &split_path(property), value);
}

/// Decode a JSON-encoded selection string into its array form.
///
/// This is the decode step the host performs on its path-list configuration
/// before projecting. Entries are validated per-path later, so the array may
/// still contain non-string values.
///
/// # Errors
///
/// - [`FilterError::SelectionParse`] when `raw` is not valid JSON;
/// - [`FilterError::SelectionNotArray`] when it decodes to a non-array.
pub fn parse_selection(raw: &str) -> Result<Value, FilterError> {
    let selected: Value =
        serde_json::from_str(raw).map_err(|e| FilterError::SelectionParse(e.to_string()))?;
    if !selected.is_array() {
        return Err(FilterError::SelectionNotArray);
    }
    Ok(selected)
}

/// Run one message through the filter.
///
/// Reads the source value at `property`, decodes `raw_selection`, projects
/// with `mode`, and writes a concrete result back at the same property,
/// returning `true`. On "no data" the message is left unchanged and `false`
/// is returned, so the caller can forward the original as-is.
///
/// # Errors
///
/// Propagates the selection decode errors of [`parse_selection`] and
/// [`FilterError::InvalidMode`] for an unknown mode string.
///
/// # Example
///
/// ```
/// use json_filter_core::filter_property;
/// use serde_json::json;
///
/// let mut msg = json!({"payload": {"a": {"b": 1}, "d": 3}});
/// let written = filter_property(&mut msg, "payload", r#"["a.b"]"#, "object").unwrap();
/// assert!(written);
/// assert_eq!(msg, json!({"payload": {"a": {"b": 1}}}));
/// ```
pub fn filter_property(
    msg: &mut Value,
    property: &str,
    raw_selection: &str,
    mode: &str,
) -> Result<bool, FilterError> {
    let selected = parse_selection(raw_selection)?;
    match filter_json(get_property(msg, property), &selected, mode)? {
        Some(result) => {
            set_property(msg, property, result);
            Ok(true)
        }
        None => Ok(false),
    }
}
