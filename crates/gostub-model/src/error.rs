//! Error reporting for parser-contract validation.

use thiserror::Error;

/// Violations of the contract the upstream parser is supposed to uphold
/// when it populates the model. See [`crate::SourceInfo::validate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    /// A receiver, parameter, or result arrived with an empty bare type
    /// name.
    #[error("function `{function}`: {slot} has an empty type name")]
    EmptyTypeName { function: String, slot: String },

    /// Field indexes within a parameter or result list are not contiguous
    /// from zero.
    #[error("function `{function}`: {slot} has index {found}, expected {expected}")]
    IndexMismatch {
        function: String,
        slot: String,
        expected: usize,
        found: usize,
    },
}

impl ModelError {
    /// Create an empty-type-name error.
    pub fn empty_type_name(function: impl Into<String>, slot: impl Into<String>) -> Self {
        Self::EmptyTypeName {
            function: function.into(),
            slot: slot.into(),
        }
    }

    /// Create an index-mismatch error.
    pub fn index_mismatch(
        function: impl Into<String>,
        slot: impl Into<String>,
        expected: usize,
        found: usize,
    ) -> Self {
        Self::IndexMismatch {
            function: function.into(),
            slot: slot.into(),
            expected,
            found,
        }
    }
}
