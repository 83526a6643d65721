//! Declared function and method signatures.

use crate::field::Field;
use serde::{Deserialize, Serialize};

/// One declared function or method, as the parser saw it.
///
/// By convention a trailing error-typed result is NOT included in `results`;
/// the parser strips it and sets `returns_error` instead, so `results` holds
/// only the values a generated test would assert on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    /// Declared name, e.g. `"ParseHeader"`.
    pub name: String,
    /// Whether the name is exported (starts with an upper-case letter).
    #[serde(default)]
    pub is_exported: bool,
    /// The method receiver, present for methods and absent for free
    /// functions.
    #[serde(default)]
    pub receiver: Option<Field>,
    /// Parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<Field>,
    /// Non-error results in declaration order (see the type-level note).
    #[serde(default)]
    pub results: Vec<Field>,
    /// Whether the declaration carried a trailing error result.
    #[serde(default)]
    pub returns_error: bool,
}

impl Function {
    /// More than one non-error result.
    pub fn returns_multiple(&self) -> bool {
        self.results.len() > 1
    }

    /// Exactly one non-error result and no error.
    pub fn only_returns_one_value(&self) -> bool {
        self.results.len() == 1 && !self.returns_error
    }

    /// No non-error results, only an error.
    pub fn only_returns_error(&self) -> bool {
        self.results.is_empty() && self.returns_error
    }

    /// The Go test function name this function's stub would get:
    /// `Test` + titlecased receiver type + titlecased function name.
    ///
    /// Free functions contribute an empty receiver segment, so `baz`
    /// becomes `TestBaz` and `(Foo).bar` becomes `TestFooBar`.
    pub fn test_name(&self) -> String {
        let receiver = self
            .receiver
            .as_ref()
            .map_or("", |r| r.typ.value.as_str());
        format!("Test{}{}", title(receiver), title(&self.name))
    }
}

/// Uppercase the first character, leaving the rest untouched. The empty
/// string titlecases to itself.
fn title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
