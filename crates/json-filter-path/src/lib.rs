//! Dotted property path utilities.
//!
//! This crate implements helper functions for dotted property paths such as
//! `payload.data.items` — the path language used by message-shaping nodes to
//! address nested values inside a JSON document. A path is a sequence of
//! object keys joined by `.`; there are no wildcards, array indices, or
//! escape sequences.
//!
//! # Example
//!
//! ```
//! use json_filter_path::{split_path, join_path, resolve, assign};
//! use serde_json::json;
//!
//! // Parse a dotted path string into its segments
//! let path = split_path("foo.bar");
//! assert_eq!(path, vec!["foo".to_string(), "bar".to_string()]);
//!
//! // Format segments back to a dotted path string
//! assert_eq!(join_path(&path), "foo.bar");
//!
//! // Read a nested value
//! let doc = json!({"foo": {"bar": 42}});
//! assert_eq!(resolve(&doc, &path), Some(&json!(42)));
//!
//! // Write a nested value, creating intermediate objects
//! let mut out = json!({});
//! assign(&mut out, &path, json!(42));
//! assert_eq!(out, doc);
//! ```

mod assign;
pub use assign::assign;

mod resolve;
pub use resolve::resolve;

/// Split a dotted path string into its segments.
///
/// The empty string denotes the root and returns an empty vec. No escaping
/// is supported, so a `.` always separates segments.
///
/// # Example
///
/// ```
/// use json_filter_path::split_path;
///
/// assert_eq!(split_path(""), Vec::<String>::new());
/// assert_eq!(split_path("foo"), vec!["foo"]);
/// assert_eq!(split_path("foo.bar"), vec!["foo", "bar"]);
/// ```
pub fn split_path(path: &str) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('.').map(str::to_string).collect()
}

/// Format path segments into a dotted path string.
///
/// Returns an empty string for the root path (empty segments).
///
/// # Example
///
/// ```
/// use json_filter_path::join_path;
///
/// assert_eq!(join_path(&[]), "");
/// assert_eq!(join_path(&["foo".to_string(), "bar".to_string()]), "foo.bar");
/// ```
pub fn join_path(path: &[String]) -> String {
    path.join(".")
}

/// Check if a path points to the root value.
///
/// # Example
///
/// ```
/// use json_filter_path::is_root;
///
/// assert!(is_root(&[]));
/// assert!(!is_root(&["foo".to_string()]));
/// ```
pub fn is_root(path: &[String]) -> bool {
    path.is_empty()
}
