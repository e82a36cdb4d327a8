//! JSON projection engine — extract selected dotted paths from a value.
//!
//! Given an input value, an ordered selection of dotted property paths, and
//! an output [`Mode`], [`project`] resolves each path and re-assembles the
//! hits in one of three shapes:
//!
//! - `object` — the original nesting, restricted to the selected branches;
//! - `flattened` — each full dotted path as a literal top-level key;
//! - `array` — `{keyPath, value}` entries in selection order.
//!
//! A projection in which no selected path resolves yields `None` ("no
//! data"), distinct from an empty container. The engine is synchronous and
//! stateless: it only reads its input and allocates fresh output, so calls
//! are independent.
//!
//! # Example
//!
//! ```
//! use json_filter_core::{project, Mode};
//! use serde_json::json;
//!
//! let input = json!({"a": {"b": 1, "c": 2}, "d": 3});
//! let selected = json!(["a.b", "d"]);
//!
//! let result = project(Some(&input), &selected, Mode::Object);
//! assert_eq!(result, Some(json!({"a": {"b": 1}, "d": 3})));
//!
//! let result = project(Some(&input), &selected, Mode::Flattened);
//! assert_eq!(result, Some(json!({"a.b": 1, "d": 3})));
//! ```

pub mod error;
pub mod filter;
pub mod message;
pub mod mode;

pub use error::FilterError;
pub use filter::{filter_json, project};
pub use message::{
    filter_property, get_property, parse_selection, set_property, DEFAULT_PROPERTY,
};
pub use mode::Mode;
