use std::fmt;
use std::str::FromStr;

use crate::error::FilterError;

/// Output shape selector for a projection.
///
/// The mode determines only how resolved values are re-assembled; it never
/// affects which paths are resolved or how.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Reconstruct the original nesting, restricted to the selected branches.
    #[default]
    Object,
    /// Use each full dotted path as a literal top-level key.
    Flattened,
    /// Emit `{keyPath, value}` entries in selection order.
    Array,
}

impl Mode {
    /// The wire name of the mode, as it appears in host configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Object => "object",
            Mode::Flattened => "flattened",
            Mode::Array => "array",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "object" => Ok(Mode::Object),
            "flattened" => Ok(Mode::Flattened),
            "array" => Ok(Mode::Array),
            other => Err(FilterError::InvalidMode(other.to_string())),
        }
    }
}
