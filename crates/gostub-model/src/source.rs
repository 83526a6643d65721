//! Per-file aggregate and the test-candidate selection queries.

use crate::error::ModelError;
use crate::field::Field;
use crate::function::Function;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, trace};

/// One import declaration from the analyzed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    /// Explicit import alias; `None` means the package's default identifier.
    #[serde(default)]
    pub name: Option<String>,
    /// Import path, e.g. `"github.com/user/repo/pkg"`.
    pub path: String,
}

/// File-level metadata captured alongside the function signatures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Declared package name.
    pub package: String,
    /// Imports in declaration order.
    #[serde(default)]
    pub imports: Vec<Import>,
    /// Raw source bytes the renderer carries through verbatim. Opaque to
    /// this crate.
    #[serde(default)]
    pub code: Vec<u8>,
}

/// The normalized model of one analyzed source file: its header plus every
/// declared function, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub header: Header,
    pub funcs: Vec<Function>,
}

impl SourceInfo {
    /// Select the functions that should get a generated test stub.
    ///
    /// A function is included iff all of the following hold, evaluated in
    /// declaration order (the output preserves that order):
    ///
    /// - it has a receiver, at least one parameter, or at least one result
    ///   (a zero-signature function is never test-worthy);
    /// - its [`Function::test_name`] is not in `already_tested`
    ///   (case-sensitive exact match, any input ordering);
    /// - `excl` is absent or does not match the function name;
    /// - `only` is absent or does match the function name.
    ///
    /// `excl` and `only` are independent constraints, both applied. Filters
    /// are compiled by the caller; absent filters always pass. The query
    /// never fails — the result may simply be empty.
    pub fn testable_funcs<'a>(
        &'a self,
        only: Option<&Regex>,
        excl: Option<&Regex>,
        already_tested: &[String],
    ) -> Vec<&'a Function> {
        let tested: HashSet<&str> = already_tested.iter().map(String::as_str).collect();

        let mut selected = Vec::new();
        for func in &self.funcs {
            if func.receiver.is_none() && func.parameters.is_empty() && func.results.is_empty() {
                trace!(function = %func.name, "skipping function with empty signature");
                continue;
            }
            if tested.contains(func.test_name().as_str()) {
                trace!(function = %func.name, "skipping already-tested function");
                continue;
            }
            if excl.is_some_and(|re| re.is_match(&func.name)) {
                trace!(function = %func.name, "skipping excluded function");
                continue;
            }
            if only.is_some_and(|re| !re.is_match(&func.name)) {
                trace!(function = %func.name, "skipping function outside the only-filter");
                continue;
            }
            selected.push(func);
        }

        debug!(
            package = %self.header.package,
            declared = self.funcs.len(),
            selected = selected.len(),
            "selected test candidates"
        );
        selected
    }

    /// Whether any function returns a value the generated tests cannot
    /// compare with `==`, in which case the rendered file needs a
    /// `reflect.DeepEqual` import.
    ///
    /// Purely existential over the whole file; independent of scan order.
    pub fn uses_reflection(&self) -> bool {
        self.funcs
            .iter()
            .any(|f| f.results.iter().any(|r| !r.is_basic_type()))
    }

    /// Check the contract the upstream parser must uphold: every field has
    /// a non-empty bare type name, and indexes within each parameter and
    /// result list are contiguous from zero.
    ///
    /// The query methods above never guard these preconditions themselves;
    /// this is an opt-in check for the parser boundary.
    pub fn validate(&self) -> Result<(), ModelError> {
        for func in &self.funcs {
            if let Some(receiver) = &func.receiver {
                if receiver.typ.value.is_empty() {
                    return Err(ModelError::empty_type_name(&func.name, "receiver"));
                }
            }
            validate_list(&func.name, "parameter", &func.parameters)?;
            validate_list(&func.name, "result", &func.results)?;
        }
        Ok(())
    }
}

fn validate_list(function: &str, kind: &str, fields: &[Field]) -> Result<(), ModelError> {
    for (position, field) in fields.iter().enumerate() {
        let slot = format!("{kind} {position}");
        if field.typ.value.is_empty() {
            return Err(ModelError::empty_type_name(function, slot));
        }
        if field.index != position {
            return Err(ModelError::index_mismatch(
                function,
                slot,
                position,
                field.index,
            ));
        }
    }
    Ok(())
}
