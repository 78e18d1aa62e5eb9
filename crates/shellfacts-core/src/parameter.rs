//! Inferred function parameters.

use serde::{Deserialize, Serialize};

/// A function parameter inferred from positional-variable usage.
///
/// Shell functions never declare parameters, so `name` is the positional
/// token itself (`"$1"`, `"$2"`, …) or the rest marker (`"$@"` / `"$*"`).
///
/// # Example
///
/// ```
/// use shellfacts_core::FunctionParameter;
///
/// let param = FunctionParameter::positional(2, Some(String::from("22")));
/// assert_eq!(param.name(), "$2");
/// assert!(param.is_optional());
/// assert_eq!(param.index(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionParameter {
    /// Positional token or rest marker.
    pub name: String,
    /// Whether callers may omit the argument.
    pub optional: bool,
    /// Whether the parameter collects all remaining arguments.
    pub rest: bool,
    /// Default value text from a `${N:-default}` expansion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl FunctionParameter {
    /// Creates the positional parameter `$index`.
    ///
    /// The parameter is optional exactly when it has a default value.
    #[must_use]
    pub fn positional(index: u32, default_value: Option<String>) -> Self {
        Self {
            name: format!("${index}"),
            optional: default_value.is_some(),
            rest: false,
            default_value,
        }
    }

    /// Creates a rest parameter named with `marker` (`"$@"` or `"$*"`).
    #[must_use]
    pub fn rest(marker: impl Into<String>) -> Self {
        Self {
            name: marker.into(),
            optional: true,
            rest: true,
            default_value: None,
        }
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the parameter is optional.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    /// Returns whether this is the rest parameter.
    #[must_use]
    pub const fn is_rest(&self) -> bool {
        self.rest
    }

    /// Returns the default value, if any.
    #[must_use]
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Returns the positional index, or `None` for the rest parameter.
    #[must_use]
    pub fn index(&self) -> Option<u32> {
        if self.rest {
            return None;
        }
        self.name.strip_prefix('$').and_then(|digits| digits.parse().ok())
    }
}
