//! Named, typed slots within parameter and result lists.

use crate::expr::TypeExpr;
use serde::{Deserialize, Serialize};

/// The closed set of Go built-in scalar type names that generated tests can
/// compare with `==` directly. Anything outside this list (including any
/// pointer, slice, or variadic form) needs `reflect.DeepEqual`.
pub const BASIC_TYPES: [&str; 19] = [
    "bool",
    "string",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
    "byte",
    "rune",
    "float32",
    "float64",
    "complex64",
    "complex128",
];

/// One slot in a parameter or result list: an optional identifier bound to a
/// type expression, at a stable position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Declared identifier. Empty for unnamed slots; may be the blank
    /// placeholder `"_"`.
    #[serde(default)]
    pub name: String,
    /// The slot's type. Exclusively owned; the parser always populates it.
    pub typ: TypeExpr,
    /// Zero-based position within the owning parameter or result list.
    pub index: usize,
}

impl Field {
    /// Whether the rendered type is one of the [`BASIC_TYPES`] scalars.
    ///
    /// The check is a whitelist lookup on the exact declaration spelling,
    /// not type inference: a starred or variadic form never matches, and
    /// neither does a user-defined alias of a basic type.
    pub fn is_basic_type(&self) -> bool {
        !self.typ.is_star
            && !self.typ.is_variadic
            && BASIC_TYPES.contains(&self.typ.value.as_str())
    }

    /// Whether the slot carries a usable identifier (non-empty and not the
    /// blank placeholder `"_"`).
    pub fn is_named(&self) -> bool {
        !self.name.is_empty() && self.name != "_"
    }

    /// Lower-cased first character of the bare type name, used to synthesize
    /// a scaffold variable name for unnamed slots (`Reader` becomes `r`).
    ///
    /// Not collision-checked against sibling identifiers: two parameters
    /// whose types share a first letter get the same short name, and the
    /// renderer is expected to cope.
    pub fn short_name(&self) -> String {
        self.typ
            .value
            .chars()
            .next()
            .map(|c| c.to_lowercase().collect())
            .unwrap_or_default()
    }
}
