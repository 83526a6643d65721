//! Type expressions as they appear in Go declaration syntax.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single type reference from a signature, together with the modifiers
/// that change how it is spelled at the declaration site.
///
/// The parser records the bare name in `value` and lifts pointer and
/// variadic markers into flags, so `...*Config` arrives as
/// `{ value: "Config", is_star: true, is_variadic: true }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeExpr {
    /// Bare type name without modifiers, e.g. `"int"` or `"Reader"`.
    pub value: String,
    /// Pointer type (`*T`).
    #[serde(default)]
    pub is_star: bool,
    /// Variadic parameter (`...T`), materialized as a slice of the element
    /// type in generated code.
    #[serde(default)]
    pub is_variadic: bool,
}

impl TypeExpr {
    /// Create a plain (non-pointer, non-variadic) type reference.
    pub fn named(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_star: false,
            is_variadic: false,
        }
    }

    /// Mark this type as a pointer.
    #[must_use]
    pub fn with_star(mut self) -> Self {
        self.is_star = true;
        self
    }

    /// Mark this type as variadic.
    #[must_use]
    pub fn with_variadic(mut self) -> Self {
        self.is_variadic = true;
        self
    }
}

impl fmt::Display for TypeExpr {
    /// Renders the expression exactly as declaration syntax, so text spliced
    /// into a generated test type-checks. The variadic slice notation wraps
    /// the star-prefixed form: star + variadic is `[]*T`, not `*[]T`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_variadic {
            f.write_str("[]")?;
        }
        if self.is_star {
            f.write_str("*")?;
        }
        f.write_str(&self.value)
    }
}
